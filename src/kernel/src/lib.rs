//! Lumen Kernel
//!
//! The interactive console of a single-address-space x86_64 kernel: a text
//! mode display surface, a PS/2 keyboard decoder and a command shell.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `console`: character grid and cursor
//! - `keyboard`: scancode decoding and the polled controller
//! - `terminal`: the shell and its built-in commands
//! - `rand`: deterministic pseudo-random numbers
//! - `fs`: the static directory listing
//! - `arch`: platform backends (VGA, ports, CPUID, serial)
//!
//! # Safety
//!
//! Outside of tests this is a `#![no_std]` kernel. All unsafe code is
//! documented with safety invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod config;
pub mod console;
pub mod fs;
pub mod keyboard;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod logger;
pub mod rand;
pub mod terminal;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to bring up serial logging.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub fn init() {
    arch::x86_64::serial::init();
    logger::init(config::LOG_LEVEL);
}
