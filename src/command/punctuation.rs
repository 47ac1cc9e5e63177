//! Inline punctuation toggling for bold, italic and strikethrough.
//!
//! The engine works on a window of two characters around the selection. If a
//! surrounded run of the marker is found there, every such run is stripped
//! and the caret is pulled back; otherwise the marker pair is inserted around
//! the selection. Italic needs special treatment because a single `*` matches
//! inside `**` and `***` runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::buffer::TextBufferMut;
use crate::scan::{byte_to_char, char_slice};
use crate::selection::Selection;

// Optional asterisks around the italic body keep it from matching the span
// between two bold+italic runs.
static BOLD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());
static ITALIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*?\*?\*[^*]+\*\*?\*?").unwrap());
static STRIKE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~[^~]+~~").unwrap());

// Bold run with non-asterisk (or string boundary) on both sides. Deciding
// factor for the italic-on-bold edge case: `***blah***` must not match.
static GUARDED_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^*])\*\*[^*]*\*\*([^*]|$)").unwrap());

/// The three inline markers and their literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMarker {
    Bold,
    Italic,
    Strikethrough,
}

impl InlineMarker {
    pub const fn as_str(self) -> &'static str {
        match self {
            InlineMarker::Bold => "**",
            InlineMarker::Italic => "*",
            InlineMarker::Strikethrough => "~~",
        }
    }

    pub const fn len(self) -> usize {
        self.as_str().len()
    }

    fn run_regex(self) -> &'static Regex {
        match self {
            InlineMarker::Bold => &BOLD_RUN,
            InlineMarker::Italic => &ITALIC_RUN,
            InlineMarker::Strikethrough => &STRIKE_RUN,
        }
    }
}

/// Toggle `marker` around the selection and return the new caret position.
///
/// Out-of-bounds selections return 0 without touching the buffer.
pub fn toggle_punctuation<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    selection: Selection,
    marker: InlineMarker,
) -> usize {
    let text = buffer.content();
    let len = text.chars().count();
    if selection.start > len || selection.end > len {
        return 0;
    }

    if marker == InlineMarker::Italic {
        if let Some(caret) = italic_edge_case(buffer, &text, len, selection) {
            return caret;
        }
    }

    // Matching is confined to the selection plus one marker width on each
    // side; runs further out stay untouched.
    let region_start = selection.start.saturating_sub(2);
    let region_end = (selection.end + 2).min(len);
    let region = char_slice(&text, region_start, region_end);
    let spans: Vec<(usize, usize)> = marker
        .run_regex()
        .find_iter(region)
        .map(|m| {
            (
                region_start + byte_to_char(region, m.start()),
                region_start + byte_to_char(region, m.end()),
            )
        })
        .collect();

    let marker_len = marker.len();
    if !spans.is_empty() {
        for &(start, end) in spans.iter().rev() {
            buffer.remove(end - marker_len..end);
            buffer.remove(start..start + marker_len);
        }
        let removed = marker_len * spans.len();
        // When the selection itself ends on a marker, the caret lands after
        // where that marker used to be.
        let before_end = char_slice(
            &text,
            (selection.end + 1).saturating_sub(marker_len),
            (selection.end + 1).min(len),
        );
        let after_end = char_slice(&text, selection.end, (selection.end + marker_len).min(len));
        let offset_at_end = if before_end == marker.as_str() || after_end == marker.as_str() {
            marker_len
        } else {
            0
        };
        // markers are stripped from both ends of each run
        let caret = selection.end as i64 - 2 * removed as i64 + offset_at_end as i64;
        return caret.max(0) as usize;
    }

    // A lone marker inside the selection would pair up with the inserted
    // ones and garble the text, so do nothing.
    if char_slice(&text, selection.start, selection.end).contains(marker.as_str()) {
        return selection.end;
    }

    insert_marker_pair(buffer, selection.start, selection.end, marker.as_str())
}

/// Italic toggled on a bold run adds a third asterisk pair instead of
/// stripping anything. Checks the selection expanded by one character first
/// (so the guards can match), then by three in case only the text without
/// its markers is selected.
fn italic_edge_case<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    text: &str,
    len: usize,
    selection: Selection,
) -> Option<usize> {
    let near = char_slice(
        text,
        selection.start.saturating_sub(1),
        (selection.end + 1).min(len),
    );
    if GUARDED_BOLD.is_match(near) {
        return Some(insert_marker_pair(buffer, selection.start, selection.end, "*"));
    }
    let wide = char_slice(
        text,
        selection.start.saturating_sub(3),
        (selection.end + 3).min(len),
    );
    if GUARDED_BOLD.is_match(wide) {
        return Some(insert_marker_pair(buffer, selection.start, selection.end, "*"));
    }
    None
}

fn insert_marker_pair<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    first: usize,
    second: usize,
    marker: &str,
) -> usize {
    buffer.insert(second, marker);
    buffer.insert(first, marker);
    second + marker.chars().count()
}
