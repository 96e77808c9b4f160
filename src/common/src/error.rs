//! System-wide error types for Lumen.

use core::fmt;

/// Input line error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineError {
    /// The line already holds `capacity` bytes
    Full {
        /// Maximum number of bytes the line can hold.
        capacity: usize,
    },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Full { capacity } => write!(f, "input line full ({} bytes)", capacity),
        }
    }
}
