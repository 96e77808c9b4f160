//! Bounded input line.

use heapless::Vec;
use lumen_common::LineError;

/// Maximum input line length.
pub const MAX_LINE_LENGTH: usize = 255;

/// Fixed-capacity line of typed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: Vec<u8, MAX_LINE_LENGTH>,
}

impl LineBuffer {
    /// Creates an empty line.
    pub const fn new() -> Self {
        LineBuffer { bytes: Vec::new() }
    }

    /// Appends `byte`, or reports [`LineError::Full`] and leaves the line unchanged.
    pub fn push(&mut self, byte: u8) -> Result<(), LineError> {
        self.bytes.push(byte).map_err(|_| LineError::Full {
            capacity: MAX_LINE_LENGTH,
        })
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    /// Empties the line.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Current contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether another byte would be rejected.
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut line = LineBuffer::new();
        for i in 0..MAX_LINE_LENGTH {
            line.push(b'a' + (i % 26) as u8).expect("room left");
        }
        assert!(line.is_full());
        assert_eq!(
            line.push(b'z'),
            Err(LineError::Full {
                capacity: MAX_LINE_LENGTH
            })
        );
        assert_eq!(line.len(), MAX_LINE_LENGTH);
        assert_eq!(line.as_bytes()[MAX_LINE_LENGTH - 1], b'a' + (254 % 26) as u8);
    }

    #[test]
    fn test_pop_and_clear() {
        let mut line = LineBuffer::new();
        assert_eq!(line.pop(), None);
        line.push(b'l').unwrap();
        line.push(b's').unwrap();
        assert_eq!(line.pop(), Some(b's'));
        assert_eq!(line.as_bytes(), b"l");
        line.clear();
        assert!(line.is_empty());
    }
}
