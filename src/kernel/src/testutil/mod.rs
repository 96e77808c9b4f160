//! Test infrastructure for the Lumen kernel.
//!
//! Provides scripted stand-ins for the hardware traits so the console state
//! machines can run on the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lumen_kernel::testutil::{FixedProcessor, ScriptedSource};
//! ```

use heapless::Deque;
use lumen_hal::{ByteSource, PortIo, Processor};

use crate::keyboard::{DATA_PORT, OUTPUT_FULL, STATUS_PORT};

/// Maximum number of bytes a script can hold.
pub const SCRIPT_CAPACITY: usize = 1024;

/// A byte source that replays a fixed script.
pub struct ScriptedSource {
    bytes: Deque<u8, SCRIPT_CAPACITY>,
}

impl ScriptedSource {
    /// Creates a source that yields `script` in order.
    ///
    /// # Panics
    ///
    /// Panics if `script` is longer than [`SCRIPT_CAPACITY`].
    pub fn new(script: &[u8]) -> Self {
        let mut bytes = Deque::new();
        for &byte in script {
            bytes.push_back(byte).expect("script too long");
        }
        ScriptedSource { bytes }
    }

    /// Whether every scripted byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ByteSource for ScriptedSource {
    /// # Panics
    ///
    /// Panics once the script is exhausted; real hardware would block forever.
    fn receive(&mut self) -> u8 {
        self.bytes.pop_front().expect("scripted input exhausted")
    }
}

/// Port I/O simulating an i8042 controller.
///
/// Reports an empty output buffer for `idle_polls` status reads before each
/// scripted byte becomes available on the data port.
pub struct ScriptedPorts {
    bytes: Deque<u8, SCRIPT_CAPACITY>,
    idle_polls: usize,
    remaining_idle: usize,
    status_reads: usize,
}

impl ScriptedPorts {
    /// Creates ports that deliver `script` with `idle_polls` empty polls in between.
    ///
    /// # Panics
    ///
    /// Panics if `script` is longer than [`SCRIPT_CAPACITY`].
    pub fn new(script: &[u8], idle_polls: usize) -> Self {
        let mut bytes = Deque::new();
        for &byte in script {
            bytes.push_back(byte).expect("script too long");
        }
        ScriptedPorts {
            bytes,
            idle_polls,
            remaining_idle: idle_polls,
            status_reads: 0,
        }
    }

    /// Number of status register reads so far.
    pub fn status_reads(&self) -> usize {
        self.status_reads
    }
}

impl PortIo for ScriptedPorts {
    fn read_port(&mut self, port: u16) -> u8 {
        match port {
            STATUS_PORT => {
                self.status_reads += 1;
                if self.remaining_idle > 0 {
                    self.remaining_idle -= 1;
                    0
                } else if self.bytes.is_empty() {
                    panic!("scripted input exhausted");
                } else {
                    OUTPUT_FULL
                }
            }
            DATA_PORT => {
                self.remaining_idle = self.idle_polls;
                self.bytes.pop_front().expect("data read with empty output buffer")
            }
            other => panic!("unexpected port read {:#06x}", other),
        }
    }
}

/// A processor with a fixed vendor label.
pub struct FixedProcessor {
    label: [u8; 12],
}

impl FixedProcessor {
    /// Creates a processor reporting `label`.
    pub const fn new(label: [u8; 12]) -> Self {
        FixedProcessor { label }
    }
}

impl Default for FixedProcessor {
    fn default() -> Self {
        Self::new(*b"GenuineIntel")
    }
}

impl Processor for FixedProcessor {
    fn vendor_label(&self) -> [u8; 12] {
        self.label
    }

    fn halt(&mut self) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}
