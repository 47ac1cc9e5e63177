//! Line and token scanning utilities.
//!
//! Pure functions over a buffer (or a single line) used by the command
//! resolvers and appliers: line boundaries, ordered-list numbers, link spans,
//! code fences. All public offsets are character offsets; regex match spans
//! are converted at the boundary.

use std::sync::LazyLock;

use regex::Regex;

use crate::buffer::TextBuffer;
use crate::list_type::ListType;
use crate::selection::Selection;

/// `^(`{3,})` - a run of three or more backticks opening/closing a code fence
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^(`{3,})").unwrap());

/// `^(\d+)\.\s.+$` - an ordered list item with content
static ORDERED_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s.+$").unwrap());

/// `^(\d+)\.\s$` - an ordered list item with no content (continuation handling)
static ORDERED_LIST_ITEM_EMPTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s$").unwrap());

/// Markdown inline link: `[label](target "title")`, label/target/title optional
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(.+)?\]\(([^ ]+?)?( "(.+)")?\)"#).unwrap());

// =============================================================================
// Offset conversion
// =============================================================================

/// Convert a byte offset within `s` to a character offset.
pub(crate) fn byte_to_char(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Convert a character offset within `s` to a byte offset.
pub(crate) fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Slice `s` by character offsets.
pub(crate) fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let sb = char_to_byte(s, start);
    let eb = char_to_byte(s, end);
    &s[sb..eb]
}

// =============================================================================
// Line boundaries
// =============================================================================

/// Offset of the first character of the line containing `pos` (the character
/// after the nearest preceding `\n`, or 0).
pub fn start_of_line<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> usize {
    let mut start = pos;
    while start > 0 && buffer.char_at(start - 1) != Some('\n') {
        start -= 1;
    }
    start
}

/// Offset of the `\n` terminating the line containing `pos` (exclusive end of
/// line), or the buffer length if the line is the last one.
pub fn end_of_line<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> usize {
    let len = buffer.len_chars();
    let mut end = pos;
    while end < len && buffer.char_at(end) != Some('\n') {
        end += 1;
    }
    end
}

/// The full line containing `pos`, without its newline.
pub fn line_at<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> String {
    let start = start_of_line(buffer, pos);
    let end = end_of_line(buffer, start);
    buffer.slice(start..end)
}

/// True iff the selected substring contains a line break.
///
/// # Panics
///
/// Panics if either bound exceeds the buffer length (the selection constructor
/// already rejects `start > end`).
pub fn is_multiline_selection<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    selection.assert_in_bounds(buffer);
    buffer
        .slice(selection.start..selection.end)
        .contains('\n')
}

/// Negation of [`is_multiline_selection`], under the same contract.
pub fn is_single_line_selection<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    !is_multiline_selection(buffer, selection)
}

// =============================================================================
// Token detection
// =============================================================================

/// Number of backticks if this line opens or closes a fenced code block.
pub fn code_fence_signs(line: &str) -> Option<usize> {
    CODE_FENCE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().len())
}

/// Parsed item number if the line is a non-empty ordered list item.
pub fn ordered_list_number(line: &str) -> Option<usize> {
    ORDERED_LIST_ITEM
        .captures(line)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// True if the line is an ordered list item with no content, e.g. `"3. "`.
pub fn is_empty_ordered_list_item(line: &str) -> bool {
    ORDERED_LIST_ITEM_EMPTY.is_match(line)
}

/// For a line consisting only of a list or checkbox marker, the marker with a
/// trailing space re-appended (indentation preserved). This is the prefix a
/// hosting editor repeats when the user continues a list with Enter.
pub fn list_item_if_empty(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let indention = line.find(trimmed).unwrap_or(0);
    let indent = &line[..indention];
    for list_type in ListType::ALL {
        if trimmed == list_type.checkbox_unchecked() {
            return Some(format!(
                "{indent}{}",
                list_type.checkbox_unchecked_with_trailing_space()
            ));
        } else if trimmed == list_type.list_symbol() {
            return Some(format!(
                "{indent}{}",
                list_type.list_symbol_with_trailing_space()
            ));
        }
    }
    let rest = &line[indention..];
    if let Some(m) = ORDERED_LIST_ITEM_EMPTY.find(rest) {
        return Some(format!("{indent}{}", m.as_str()));
    }
    None
}

/// True if either selection bound lies inside a markdown link span.
///
/// Spans are half-open: a bound at the match start counts as inside, a bound
/// exactly at the match end does not.
pub fn selection_is_in_link(text: &str, start: usize, end: usize) -> bool {
    for m in MARKDOWN_LINK.find_iter(text) {
        let m_start = byte_to_char(text, m.start());
        let m_end = byte_to_char(text, m.end());
        let inside = |bound: usize| bound >= m_start && bound < m_end;
        if inside(start) || inside(end) {
            return true;
        }
    }
    false
}

// =============================================================================
// Link builders
// =============================================================================

/// `[content](url)`
pub fn markdown_link(content: &str, url: &str) -> String {
    format!("[{content}]({url})")
}

/// `![content](url)`
pub fn markdown_embedded(content: &str, url: &str) -> String {
    format!("!{}", markdown_link(content, url))
}
