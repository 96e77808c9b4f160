//! x86_64 architecture support.
//!
//! Provides VGA text memory, i8042 port access, CPUID and serial output for
//! x86_64 platforms.

pub mod cpu;
pub mod port;
pub mod serial;
pub mod vga;

pub use cpu::Cpu;
pub use port::X86Ports;
pub use serial::SERIAL;
pub use vga::VgaBuffer;

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used by the `halt` command and after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
