//! Recently entered command lines.

use super::line::LineBuffer;
use heapless::Deque;

/// Maximum command history size.
pub const MAX_HISTORY: usize = 10;

/// Ring of the most recent non-empty lines, oldest first.
#[derive(Default)]
pub struct History {
    entries: Deque<LineBuffer, MAX_HISTORY>,
}

impl History {
    /// Creates an empty history.
    pub const fn new() -> Self {
        History {
            entries: Deque::new(),
        }
    }

    /// Records `line`, evicting the oldest entry when full. Empty lines are ignored.
    pub fn record(&mut self, line: &LineBuffer) {
        if line.is_empty() {
            return;
        }
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Room was made above.
        let _ = self.entries.push_back(line.clone());
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(LineBuffer::as_bytes)
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> LineBuffer {
        let mut line = LineBuffer::new();
        for byte in text.bytes() {
            line.push(byte).unwrap();
        }
        line
    }

    #[test]
    fn test_ignores_empty_lines() {
        let mut history = History::new();
        history.record(&LineBuffer::new());
        assert!(history.is_empty());
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = History::new();
        for i in 0..12u8 {
            history.record(&line(core::str::from_utf8(&[b'a' + i]).unwrap()));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        let first = history.iter().next().unwrap();
        let last = history.iter().last().unwrap();
        assert_eq!(first, b"c");
        assert_eq!(last, b"l");
    }
}
