//! Busy-polling i8042 keyboard controller.

use lumen_hal::{ByteSource, PortIo};

/// Controller status register.
pub const STATUS_PORT: u16 = 0x64;

/// Controller data register.
pub const DATA_PORT: u16 = 0x60;

/// Status bit: output buffer full (data ready for the CPU).
pub const OUTPUT_FULL: u8 = 1 << 0;

/// Reads scancodes by spinning on the controller status register.
pub struct PolledController<P> {
    ports: P,
}

impl<P: PortIo> PolledController<P> {
    /// Creates a controller over the given port accessor.
    pub fn new(ports: P) -> Self {
        PolledController { ports }
    }

    /// Returns the underlying port accessor.
    pub fn ports(&self) -> &P {
        &self.ports
    }
}

impl<P: PortIo> ByteSource for PolledController<P> {
    fn receive(&mut self) -> u8 {
        while self.ports.read_port(STATUS_PORT) & OUTPUT_FULL == 0 {
            core::hint::spin_loop();
        }
        self.ports.read_port(DATA_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedPorts;

    #[test]
    fn test_receive_waits_for_output_full() {
        let mut controller = PolledController::new(ScriptedPorts::new(&[0x1E, 0x30], 3));
        assert_eq!(controller.receive(), 0x1E);
        assert_eq!(controller.ports().status_reads(), 4);
        assert_eq!(controller.receive(), 0x30);
        assert_eq!(controller.ports().status_reads(), 8);
    }

    #[test]
    fn test_receive_without_idle_polls() {
        let mut controller = PolledController::new(ScriptedPorts::new(&[0x9D], 0));
        assert_eq!(controller.receive(), 0x9D);
        assert_eq!(controller.ports().status_reads(), 1);
    }
}
