//! Command-line shell with input handling.
//!
//! The shell is always waiting for input: every logical character either edits
//! the line, interrupts it, or submits it for dispatch.

use super::commands::{self, Builtin, Command};
use super::history::History;
use super::line::LineBuffer;
use crate::config::ShellConfig;
use crate::console::{Screen, BACKSPACE};
use crate::keyboard::{Keyboard, INTERRUPT};
use crate::rand::Lcg;
use core::fmt::Write;
use lumen_common::DirEntry;
use lumen_hal::{ByteSource, Processor, TextBuffer};

/// What the shell does after handling a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop for good.
    Halt,
}

/// Interactive shell owning the display, keyboard and all console state.
pub struct Shell<B, S, P> {
    screen: Screen<B>,
    keyboard: Keyboard<S>,
    processor: P,
    listing: &'static [DirEntry],
    config: ShellConfig,
    /// Current input buffer.
    line: LineBuffer,
    history: History,
    rng: Lcg,
    /// Logical characters received so far; reported by `time`.
    keystrokes: u32,
    halted: bool,
}

impl<B, S, P> Shell<B, S, P>
where
    B: TextBuffer,
    S: ByteSource,
    P: Processor,
{
    /// Assembles a shell. Nothing is drawn until [`Shell::start`].
    pub fn new(
        screen: Screen<B>,
        keyboard: Keyboard<S>,
        processor: P,
        listing: &'static [DirEntry],
        config: ShellConfig,
    ) -> Self {
        let rng = Lcg::new(config.seed);
        let mut screen = screen;
        screen.set_color_code(config.color);
        Shell {
            screen,
            keyboard,
            processor,
            listing,
            config,
            line: LineBuffer::new(),
            history: History::new(),
            rng,
            keystrokes: 0,
            halted: false,
        }
    }

    /// Clears the screen, shows the banner and the first prompt.
    pub fn start(&mut self) {
        self.screen.initialize();
        self.screen.write_str(self.config.banner);
        self.screen.put_char(b'\n');
        self.prompt();
    }

    /// Display the shell prompt.
    pub fn prompt(&mut self) {
        self.screen.write_str(self.config.prompt);
    }

    /// Reads and handles characters until `halt` is entered.
    pub fn run_until_halt(&mut self) {
        while !self.halted {
            let ch = self.keyboard.next_char();
            self.handle_char(ch);
        }
    }

    /// Runs the shell, then stops the processor. Never returns.
    pub fn run(mut self) -> ! {
        self.run_until_halt();
        log::info!("halting");
        self.processor.halt()
    }

    /// Handles one logical character.
    pub fn handle_char(&mut self, ch: u8) -> Flow {
        if self.halted {
            return Flow::Halt;
        }
        self.keystrokes = self.keystrokes.wrapping_add(1);

        match ch {
            INTERRUPT => {
                self.screen.write_str("^c\n");
                self.line.clear();
                self.prompt();
            }
            b'\n' => {
                self.screen.put_char(b'\n');
                let flow = self.dispatch();
                self.line.clear();
                if flow == Flow::Halt {
                    self.halted = true;
                    return Flow::Halt;
                }
                self.prompt();
            }
            BACKSPACE => {
                if self.line.pop().is_some() {
                    self.screen.put_char(BACKSPACE);
                } else {
                    log::trace!("backspace on empty line ignored");
                }
            }
            ch => match self.line.push(ch) {
                Ok(()) => self.screen.put_char(ch),
                Err(err) => log::debug!("dropping {:#04x}: {}", ch, err),
            },
        }
        Flow::Continue
    }

    /// Executes the current line.
    fn dispatch(&mut self) -> Flow {
        self.history.record(&self.line);

        let command = Command::parse(self.line.as_bytes());
        log::debug!("dispatch {:?}", command);

        match command {
            Command::Empty => {}
            Command::Unknown => self.screen.write_str("Unknown command.\n"),
            Command::Echo(text) => {
                self.screen.write_bytes(text);
                self.screen.put_char(b'\n');
            }
            Command::Builtin(builtin) => match builtin {
                Builtin::Help => commands::print_help(&mut self.screen),
                Builtin::List => commands::print_listing(&mut self.screen, self.listing, false),
                Builtin::ListLong => {
                    commands::print_listing(&mut self.screen, self.listing, true)
                }
                Builtin::Time => {
                    let _ = writeln!(self.screen, "uptime: {} seconds", self.keystrokes);
                }
                Builtin::Cpu => {
                    let label = self.processor.vendor_label();
                    let len = label.iter().position(|&b| b == 0).unwrap_or(label.len());
                    self.screen.write_str("CPU: ");
                    self.screen.write_bytes(&label[..len]);
                    self.screen.put_char(b'\n');
                }
                Builtin::Rand => {
                    let value = self.rng.next();
                    let _ = writeln!(self.screen, "{}", value);
                }
                Builtin::Whoami => self.screen.write_str(self.config.user),
                Builtin::History => {
                    for (i, entry) in self.history.iter().enumerate() {
                        let _ = write!(self.screen, "  {}  ", i + 1);
                        self.screen.write_bytes(entry);
                        self.screen.put_char(b'\n');
                    }
                }
                Builtin::Clear => self.screen.initialize(),
                Builtin::Halt => {
                    self.screen.write_str(self.config.farewell);
                    return Flow::Halt;
                }
            },
        }
        Flow::Continue
    }

    /// The display surface.
    pub fn screen(&self) -> &Screen<B> {
        &self.screen
    }

    /// The keyboard decoder.
    pub fn keyboard(&self) -> &Keyboard<S> {
        &self.keyboard
    }

    /// Get the current input buffer.
    pub fn input(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Number of logical characters received.
    pub fn keystrokes(&self) -> u32 {
        self.keystrokes
    }

    /// Whether `halt` has been executed.
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
