//! Terminal subsystem for Lumen.
//!
//! Provides the line-oriented command interpreter that sits on top of the
//! display surface and keyboard decoder.
//!
//! # Architecture
//!
//! - `shell`: read-eval loop with line editing
//! - `commands`: command table and built-in output
//! - `line`: bounded input line
//! - `history`: recently entered lines

pub mod commands;
pub mod history;
pub mod line;
pub mod shell;

pub use commands::{Builtin, Command};
pub use line::{LineBuffer, MAX_LINE_LENGTH};
pub use shell::{Flow, Shell};
