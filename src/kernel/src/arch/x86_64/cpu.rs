//! Processor identification and halt.

use core::arch::x86_64::__cpuid;
use lumen_hal::Processor;

/// The boot processor.
#[derive(Debug, Default)]
pub struct Cpu;

impl Processor for Cpu {
    fn vendor_label(&self) -> [u8; 12] {
        // SAFETY: CPUID leaf 0 exists on every x86_64 processor.
        let leaf = unsafe { __cpuid(0) };
        let mut label = [0u8; 12];
        label[0..4].copy_from_slice(&leaf.ebx.to_le_bytes());
        label[4..8].copy_from_slice(&leaf.edx.to_le_bytes());
        label[8..12].copy_from_slice(&leaf.ecx.to_le_bytes());
        label
    }

    fn halt(&mut self) -> ! {
        x86_64::instructions::interrupts::disable();
        super::halt_loop()
    }
}
