//! In-memory text buffer.

use super::{BUFFER_HEIGHT, BUFFER_WIDTH};
use heapless::String;
use lumen_hal::TextBuffer;

/// Maximum UTF-8 length of one rendered row.
const LINE_CAPACITY: usize = BUFFER_WIDTH * 2;

/// An 80×25 grid of cells held in ordinary memory.
///
/// Behaves like VGA text memory without touching hardware, for headless use
/// and tests.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryBuffer {
    cells: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl MemoryBuffer {
    /// Creates a zeroed buffer.
    pub const fn new() -> Self {
        Self::filled(0)
    }

    /// Creates a buffer with every cell set to `cell`.
    pub const fn filled(cell: u16) -> Self {
        MemoryBuffer {
            cells: [[cell; BUFFER_WIDTH]; BUFFER_HEIGHT],
        }
    }

    /// Returns the character codes of one row.
    pub fn row_bytes(&self, row: usize) -> [u8; BUFFER_WIDTH] {
        let mut bytes = [0; BUFFER_WIDTH];
        for (byte, cell) in bytes.iter_mut().zip(self.cells[row].iter()) {
            *byte = *cell as u8;
        }
        bytes
    }

    /// Renders one row as text with trailing blanks removed.
    pub fn line(&self, row: usize) -> String<LINE_CAPACITY> {
        let bytes = self.row_bytes(row);
        let end = bytes
            .iter()
            .rposition(|&b| b != b' ' && b != 0)
            .map_or(0, |i| i + 1);
        let mut line = String::new();
        for &byte in &bytes[..end] {
            // Two bytes per char at most, so the row always fits.
            let _ = line.push(char::from(byte));
        }
        line
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        self.cells[row][col] = cell;
    }

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }
}
