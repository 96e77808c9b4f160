//! VGA text mode memory for x86_64.
//!
//! Exposes the 80×25 text buffer at 0xB8000 as a [`TextBuffer`].

use crate::console::{BUFFER_HEIGHT, BUFFER_WIDTH};
use core::ptr;
use lumen_hal::TextBuffer;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// Handle to VGA text memory.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is identity-mapped by the bootloader.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle to VGA text memory.
    ///
    /// # Safety
    ///
    /// At most one `VgaBuffer` may exist at a time, and 0xB8000 must be mapped.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH, "cell out of bounds");
        // SAFETY: Indices are checked above and the pointer was validated at
        // construction time. Using volatile write because the VGA buffer is
        // memory-mapped I/O that may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(ptr::addr_of_mut!((*self.buffer).chars[row][col]), cell);
        }
    }

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH, "cell out of bounds");
        // SAFETY: Same as `write_cell`.
        unsafe { ptr::read_volatile(ptr::addr_of!((*self.buffer).chars[row][col])) }
    }
}
