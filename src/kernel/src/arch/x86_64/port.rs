//! Raw I/O port access.

use lumen_hal::PortIo;
use x86_64::instructions::port::PortReadOnly;

/// Reads x86 I/O ports with `in` instructions.
#[derive(Debug, Default)]
pub struct X86Ports;

impl PortIo for X86Ports {
    fn read_port(&mut self, port: u16) -> u8 {
        let mut port = PortReadOnly::<u8>::new(port);
        // SAFETY: The kernel runs in ring 0 with full I/O privilege. Only the
        // keyboard controller ports are read, which has no side effects beyond
        // consuming the pending scancode.
        unsafe { port.read() }
    }
}
