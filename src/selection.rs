//! Selection type for the command engine.
//!
//! A selection is a pair of character offsets into the buffer. Unlike an
//! anchor/head pair it is always normalized: `start <= end`. `start == end`
//! denotes a caret.

use crate::buffer::TextBuffer;

/// A normalized text selection, equal offsets meaning a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`; selections handed to the engine are expected
    /// to be normalized by the host.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "selection end ({end}) must be greater or equal to selection start ({start})"
        );
        Self { start, end }
    }

    /// Create a collapsed selection (caret with no extent)
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if selection is a caret (no extent)
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selection in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assert that both bounds lie within `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if either bound exceeds the buffer length. Out-of-range
    /// selections are a caller bug, not a recoverable condition.
    pub fn assert_in_bounds<B: TextBuffer + ?Sized>(&self, buffer: &B) {
        let len = buffer.len_chars();
        assert!(
            self.start <= len,
            "selection start was {} but content length was only {}",
            self.start,
            len
        );
        assert!(
            self.end <= len,
            "selection end was {} but content length was only {}",
            self.end,
            len
        );
    }
}

impl From<(usize, usize)> for Selection {
    fn from((start, end): (usize, usize)) -> Self {
        Selection::new(start, end)
    }
}
