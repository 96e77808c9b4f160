//! Built-in shell commands.
//!
//! Command text is matched exactly and case-sensitively against [`COMMANDS`]
//! in order; the first match wins. Only when no entry matches is the `echo `
//! prefix rule tried.

use crate::console::Screen;
use core::fmt::Write;
use lumen_common::DirEntry;
use lumen_hal::TextBuffer;

/// Built-in command tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Display the command list.
    Help,
    /// List entry names.
    List,
    /// List entries with type and size.
    ListLong,
    /// Show the keystroke counter.
    Time,
    /// Show the processor vendor label.
    Cpu,
    /// Print one random draw.
    Rand,
    /// Print the user label.
    Whoami,
    /// Show recent command lines.
    History,
    /// Clear the screen.
    Clear,
    /// Stop the machine.
    Halt,
}

/// Exact-match command table, in priority order.
pub const COMMANDS: &[(&str, Builtin)] = &[
    ("help", Builtin::Help),
    ("ls", Builtin::List),
    ("time", Builtin::Time),
    ("cpu", Builtin::Cpu),
    ("rand", Builtin::Rand),
    ("halt", Builtin::Halt),
    ("whoami", Builtin::Whoami),
    ("ls -l", Builtin::ListLong),
    ("cls", Builtin::Clear),
    ("history", Builtin::History),
];

/// Prefix that turns the rest of the line into output.
const ECHO_PREFIX: &[u8] = b"echo ";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// A table command.
    Builtin(Builtin),
    /// Echo the text after the prefix.
    Echo(&'a [u8]),
    /// Non-empty input that matched nothing.
    Unknown,
    /// Empty input.
    Empty,
}

impl<'a> Command<'a> {
    /// Parses a complete input line.
    pub fn parse(line: &'a [u8]) -> Command<'a> {
        if line.is_empty() {
            return Command::Empty;
        }
        if let Some(&(_, builtin)) = COMMANDS.iter().find(|(name, _)| name.as_bytes() == line) {
            return Command::Builtin(builtin);
        }
        match line.strip_prefix(ECHO_PREFIX) {
            Some(text) => Command::Echo(text),
            None => Command::Unknown,
        }
    }
}

/// Prints the command list.
pub fn print_help<B: TextBuffer>(screen: &mut Screen<B>) {
    screen.write_str(
        "Available commands: help, echo, cls, ls, ls -l, time, cpu, rand, whoami, history, halt\n",
    );
}

/// Prints `listing`, either as names on one line or one detailed line per entry.
pub fn print_listing<B: TextBuffer>(screen: &mut Screen<B>, listing: &[DirEntry], detailed: bool) {
    for entry in listing {
        if detailed {
            screen.write_str(if entry.is_directory() { "d " } else { "- " });
            // Screen writes never fail.
            let _ = write!(screen, "Size: {} B   ", entry.size());
            screen.write_str(entry.name());
            screen.put_char(b'\n');
        } else {
            screen.write_str(entry.name());
            if entry.is_directory() {
                screen.put_char(b'/');
            }
            screen.write_str("  ");
        }
    }
    screen.put_char(b'\n');
}
