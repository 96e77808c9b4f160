//! Compile-time console settings.

use crate::console::ColorCode;

/// Log level used when the `trace` feature is disabled.
#[cfg(not(feature = "trace"))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Log level used when the `trace` feature is enabled.
#[cfg(feature = "trace")]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Trace;

/// Shell presentation and startup settings.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Text shown at the start of each input cycle.
    pub prompt: &'static str,
    /// Text shown once after the screen is initialized.
    pub banner: &'static str,
    /// Label printed by `whoami`.
    pub user: &'static str,
    /// Text printed by `halt` before the processor stops.
    pub farewell: &'static str,
    /// Initial random generator state.
    pub seed: u32,
    /// Text attribute for all output.
    pub color: ColorCode,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: "> ",
            banner: "Kernel Loaded.\nType 'ls' to list files.\n",
            user: "kaushik",
            farewell: "BYE!!!",
            seed: 1,
            color: ColorCode::DEFAULT,
        }
    }
}
