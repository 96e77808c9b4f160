//! Architecture-specific implementations.
//!
//! This module provides platform backends for the HAL traits.
//! Currently supported: bare-metal x86_64.

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod x86_64;
