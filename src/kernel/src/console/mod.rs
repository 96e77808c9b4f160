//! Character-grid display surface.
//!
//! The [`Screen`] owns the cursor and the active color and writes 16-bit cells
//! into any [`TextBuffer`]. Output never scrolls: once the cursor passes the
//! last row it returns to the top and overwrites what is already there.

mod buffer;

pub use buffer::MemoryBuffer;

use core::fmt;
use lumen_hal::TextBuffer;

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// Backspace control byte.
pub const BACKSPACE: u8 = 0x08;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Combined foreground and background color, as stored in a cell's high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Light gray on black.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Returns the raw attribute byte.
    pub const fn attribute(self) -> u8 {
        self.0
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChar {
    /// Character code.
    pub ascii_character: u8,
    /// Color attribute.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// Packs the cell: character in the low byte, attribute in the high byte.
    pub const fn to_cell(self) -> u16 {
        (self.color_code.0 as u16) << 8 | self.ascii_character as u16
    }

    /// Unpacks a raw 16-bit cell.
    pub const fn from_cell(cell: u16) -> Self {
        ScreenChar {
            ascii_character: cell as u8,
            color_code: ColorCode((cell >> 8) as u8),
        }
    }
}

/// Cursor location on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    /// Row, in `0..BUFFER_HEIGHT`.
    pub row: usize,
    /// Column, in `0..BUFFER_WIDTH`.
    pub column: usize,
}

/// Text mode display surface.
///
/// Manages cursor position and color state for writing to a text buffer.
pub struct Screen<B> {
    buffer: B,
    cursor: CursorPosition,
    /// Current color code for new characters.
    color_code: ColorCode,
}

impl<B: TextBuffer> Screen<B> {
    /// Wraps `buffer` without touching its contents.
    ///
    /// Call [`Screen::initialize`] to clear it.
    pub fn new(buffer: B) -> Self {
        Screen {
            buffer,
            cursor: CursorPosition::default(),
            color_code: ColorCode::DEFAULT,
        }
    }

    /// Fills the grid with blanks in the active color and homes the cursor.
    pub fn initialize(&mut self) {
        let blank = self.blank();
        for row in 0..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                self.buffer.write_cell(row, col, blank);
            }
        }
        self.cursor = CursorPosition::default();
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Sets the active color code.
    pub fn set_color_code(&mut self, color_code: ColorCode) {
        self.color_code = color_code;
    }

    /// Returns the active color code.
    pub fn color_code(&self) -> ColorCode {
        self.color_code
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Reads back the cell at (`row`, `col`).
    pub fn char_at(&self, row: usize, col: usize) -> ScreenChar {
        ScreenChar::from_cell(self.buffer.read_cell(row, col))
    }

    /// Writes a single byte, handling newline and backspace.
    ///
    /// Every byte is accepted. The cursor wraps to the next row after the last
    /// column and back to row 0 after the last row.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.cursor.column = 0;
                self.cursor.row += 1;
            }
            BACKSPACE => {
                if self.cursor.column > 0 {
                    self.cursor.column -= 1;
                    let blank = self.blank();
                    self.buffer
                        .write_cell(self.cursor.row, self.cursor.column, blank);
                }
            }
            byte => {
                let cell = ScreenChar {
                    ascii_character: byte,
                    color_code: self.color_code,
                }
                .to_cell();
                self.buffer.write_cell(self.cursor.row, self.cursor.column, cell);
                self.cursor.column += 1;
            }
        }

        if self.cursor.column >= BUFFER_WIDTH {
            self.cursor.column = 0;
            self.cursor.row += 1;
        }
        if self.cursor.row >= BUFFER_HEIGHT {
            log::trace!("cursor wrapped to top row");
            self.cursor.row = 0;
        }
    }

    /// Writes every byte of `bytes` in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Writes a string byte by byte.
    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    fn blank(&self) -> u16 {
        ScreenChar {
            ascii_character: b' ',
            color_code: self.color_code,
        }
        .to_cell()
    }
}

impl<B: TextBuffer> fmt::Write for Screen<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen<MemoryBuffer> {
        let mut screen = Screen::new(MemoryBuffer::new());
        screen.initialize();
        screen
    }

    #[test]
    fn test_cell_layout() {
        let ch = ScreenChar {
            ascii_character: b'A',
            color_code: ColorCode::new(Color::Yellow, Color::Blue),
        };
        assert_eq!(ch.to_cell(), 0x1E41);
        assert_eq!(ScreenChar::from_cell(0x1E41), ch);
        assert_eq!(ColorCode::DEFAULT.attribute(), 0x07);
    }

    #[test]
    fn test_initialize_clears_grid() {
        let mut screen = Screen::new(MemoryBuffer::filled(0x4F58));
        screen.initialize();
        for row in 0..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                assert_eq!(screen.buffer().read_cell(row, col), 0x0720);
            }
        }
        assert_eq!(screen.cursor(), CursorPosition::default());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut screen = screen();
        let mut seed = 7u32;
        for _ in 0..5000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let byte = match seed >> 28 {
                0..=1 => b'\n',
                2 => BACKSPACE,
                _ => (seed >> 16) as u8,
            };
            screen.put_char(byte);
            let cursor = screen.cursor();
            assert!(cursor.row < BUFFER_HEIGHT);
            assert!(cursor.column < BUFFER_WIDTH);
        }
    }

    #[test]
    fn test_full_row_wraps_once() {
        let mut screen = screen();
        for i in 0..BUFFER_WIDTH {
            screen.put_char(b'a' + (i % 26) as u8);
            if i < BUFFER_WIDTH - 1 {
                assert_eq!(screen.cursor().row, 0);
            }
        }
        assert_eq!(screen.cursor(), CursorPosition { row: 1, column: 0 });
        assert_eq!(screen.char_at(0, 79).ascii_character, b'b');
    }

    #[test]
    fn test_newlines_wrap_to_top_without_scrolling() {
        let mut screen = screen();
        screen.write_str("first");
        screen.put_char(b'\n');
        screen.write_str("second");
        for _ in 0..BUFFER_HEIGHT - 1 {
            screen.put_char(b'\n');
        }
        assert_eq!(screen.cursor(), CursorPosition { row: 0, column: 0 });
        // Rows keep their place: nothing shifted up.
        assert_eq!(screen.buffer().line(1).as_str(), "second");

        screen.write_str("XY");
        assert_eq!(screen.buffer().line(0).as_str(), "XYrst");
    }

    #[test]
    fn test_twenty_five_newlines_return_to_row_zero() {
        let mut screen = screen();
        for _ in 0..BUFFER_HEIGHT {
            screen.put_char(b'\n');
        }
        assert_eq!(screen.cursor().row, 0);
    }

    #[test]
    fn test_backspace_clears_previous_cell() {
        let mut screen = screen();
        screen.write_str("ab");
        screen.put_char(BACKSPACE);
        assert_eq!(screen.cursor().column, 1);
        assert_eq!(screen.char_at(0, 1).ascii_character, b' ');
        assert_eq!(screen.char_at(0, 0).ascii_character, b'a');
    }

    #[test]
    fn test_backspace_at_column_zero_is_ignored() {
        let mut screen = screen();
        screen.write_str("x\n");
        screen.put_char(BACKSPACE);
        assert_eq!(screen.cursor(), CursorPosition { row: 1, column: 0 });
        assert_eq!(screen.char_at(0, 0).ascii_character, b'x');
    }

    #[test]
    fn test_cells_keep_attribute_of_write_time() {
        let mut screen = screen();
        screen.put_char(b'a');
        screen.set_color(Color::LightRed, Color::Black);
        screen.put_char(b'b');
        assert_eq!(screen.char_at(0, 0).color_code, ColorCode::DEFAULT);
        assert_eq!(
            screen.char_at(0, 1).color_code,
            ColorCode::new(Color::LightRed, Color::Black)
        );
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;

        let mut screen = screen();
        write!(screen, "Size: {} B", 102400).unwrap();
        assert_eq!(screen.buffer().line(0).as_str(), "Size: 102400 B");
    }
}
