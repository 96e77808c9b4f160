//! Lumen Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.
//! The console core only ever talks to hardware through these seams, so the same
//! state machines run against VGA memory and I/O ports on bare metal and against
//! scripted backends in tests.

#![no_std]

/// Raw port input.
pub trait PortIo {
    /// Reads one byte from the numbered I/O port.
    fn read_port(&mut self, port: u16) -> u8;
}

/// A blocking source of raw bytes, such as a keyboard controller.
pub trait ByteSource {
    /// Blocks until the next raw byte is available and returns it.
    fn receive(&mut self) -> u8;
}

/// A character-cell display memory.
///
/// Each cell is 16 bits wide: the low byte is the character code and the
/// high byte is the color attribute.
pub trait TextBuffer {
    /// Stores `cell` at (`row`, `col`).
    fn write_cell(&mut self, row: usize, col: usize, cell: u16);
    /// Loads the cell at (`row`, `col`).
    fn read_cell(&self, row: usize, col: usize) -> u16;
}

/// Processor identification and control.
pub trait Processor {
    /// Returns the 12-byte vendor identification string.
    fn vendor_label(&self) -> [u8; 12];
    /// Stops the processor permanently.
    fn halt(&mut self) -> !;
}
