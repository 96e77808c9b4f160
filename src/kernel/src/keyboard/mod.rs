//! PS/2 keyboard decoding.
//!
//! Turns raw scan code set 1 bytes into logical characters using a fixed US
//! layout. The only modifier tracked is left control, which exists so that
//! Ctrl+C can be reported as [`INTERRUPT`].
//!
//! # Architecture
//!
//! - `controller`: busy-polling byte source over the i8042 status/data ports

mod controller;

pub use controller::{PolledController, DATA_PORT, OUTPUT_FULL, STATUS_PORT};

use lumen_hal::ByteSource;

/// Logical character reported for Ctrl+C.
pub const INTERRUPT: u8 = 0x03;

/// Bit set on every key release scancode.
const RELEASE_BIT: u8 = 0x80;

/// Left control make code.
const LEFT_CONTROL: u8 = 0x1D;

/// Make code of the `C` key.
const KEY_C: u8 = 0x2E;

/// Scan code set 1 to ASCII, US layout. Zero means no character.
#[rustfmt::skip]
static US_LAYOUT: [u8; 128] = {
    let mut table = [0u8; 128];
    let keys: [u8; 58] = [
        0, 27, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', 0x08,
        b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
        0, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`', 0,
        b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', 0, b'*', 0, b' ',
    ];
    let mut i = 0;
    while i < keys.len() {
        table[i] = keys[i];
        i += 1;
    }
    table
};

/// Keyboard decoder with modifier tracking.
pub struct Keyboard<S> {
    source: S,
    control_held: bool,
}

impl<S: ByteSource> Keyboard<S> {
    /// Creates a decoder reading from `source`, with no modifier held.
    pub fn new(source: S) -> Self {
        Keyboard {
            source,
            control_held: false,
        }
    }

    /// Blocks until one logical character is decoded and returns it.
    pub fn next_char(&mut self) -> u8 {
        loop {
            let scancode = self.source.receive();
            if let Some(ch) = self.decode(scancode) {
                return ch;
            }
        }
    }

    /// Whether left control is currently held.
    pub fn control_held(&self) -> bool {
        self.control_held
    }

    /// Feeds one scancode through the decoder.
    ///
    /// Returns the logical character if this scancode completes one.
    pub fn decode(&mut self, scancode: u8) -> Option<u8> {
        if scancode & RELEASE_BIT != 0 {
            if scancode & !RELEASE_BIT == LEFT_CONTROL {
                self.control_held = false;
            }
            return None;
        }

        if scancode == LEFT_CONTROL {
            self.control_held = true;
            return None;
        }

        if self.control_held && scancode == KEY_C {
            return Some(INTERRUPT);
        }

        match US_LAYOUT[usize::from(scancode)] {
            0 => {
                log::trace!("unmapped scancode {:#04x}", scancode);
                None
            }
            ch => Some(ch),
        }
    }

    /// Returns the underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedSource;

    fn keyboard() -> Keyboard<ScriptedSource> {
        Keyboard::new(ScriptedSource::new(&[]))
    }

    #[test]
    fn test_layout_letters() {
        let mut kb = keyboard();
        assert_eq!(kb.decode(0x1E), Some(b'a'));
        assert_eq!(kb.decode(KEY_C), Some(b'c'));
        assert_eq!(kb.decode(0x1C), Some(b'\n'));
        assert_eq!(kb.decode(0x0E), Some(0x08));
        assert_eq!(kb.decode(0x39), Some(b' '));
        assert_eq!(kb.decode(0x0C), Some(b'-'));
    }

    #[test]
    fn test_ctrl_c_yields_interrupt() {
        let mut kb = keyboard();
        assert_eq!(kb.decode(LEFT_CONTROL), None);
        assert!(kb.control_held());
        assert_eq!(kb.decode(KEY_C), Some(INTERRUPT));
        // Other letters pass through while control is held.
        assert_eq!(kb.decode(0x1E), Some(b'a'));
    }

    #[test]
    fn test_control_release_restores_letters() {
        let mut kb = keyboard();
        kb.decode(LEFT_CONTROL);
        assert_eq!(kb.decode(LEFT_CONTROL | RELEASE_BIT), None);
        assert!(!kb.control_held());
        assert_eq!(kb.decode(KEY_C), Some(b'c'));
    }

    #[test]
    fn test_release_never_produces_output() {
        for held in [false, true] {
            let mut kb = keyboard();
            if held {
                kb.decode(LEFT_CONTROL);
            }
            for code in 0x80..=0xFFu8 {
                if code == LEFT_CONTROL | RELEASE_BIT {
                    continue;
                }
                assert_eq!(kb.decode(code), None, "scancode {:#04x}", code);
                assert_eq!(kb.control_held(), held);
            }
        }
    }

    #[test]
    fn test_unmapped_codes_yield_nothing() {
        let mut kb = keyboard();
        // Escape maps to 27, left shift and 0x48 (arrow up) are unmapped.
        assert_eq!(kb.decode(0x01), Some(27));
        assert_eq!(kb.decode(0x2A), None);
        assert_eq!(kb.decode(0x48), None);
        assert_eq!(kb.decode(0x00), None);
    }

    #[test]
    fn test_next_char_skips_until_character() {
        let mut kb = Keyboard::new(ScriptedSource::new(&[0x2A, 0x9E, 0x23, 0x17]));
        assert_eq!(kb.next_char(), b'h');
        assert_eq!(kb.next_char(), b'i');
        assert!(kb.source().is_exhausted());
    }

    #[test]
    fn test_next_char_ctrl_c_sequence() {
        let mut kb = Keyboard::new(ScriptedSource::new(&[
            LEFT_CONTROL,
            KEY_C,
            KEY_C | RELEASE_BIT,
            LEFT_CONTROL | RELEASE_BIT,
            KEY_C,
        ]));
        assert_eq!(kb.next_char(), INTERRUPT);
        assert_eq!(kb.next_char(), b'c');
    }
}
