//! Enabled/active predicates, one pair per command family.
//!
//! Resolvers never mutate the buffer. They all share the single-line
//! restriction: no command is enabled across a multiline selection.

use crate::buffer::TextBuffer;
use crate::list_type::{detect_list, line_starts_with_any_checkbox};
use crate::scan::{
    end_of_line, is_single_line_selection, ordered_list_number, selection_is_in_link,
    start_of_line,
};
use crate::selection::Selection;

/// The line(s) touched by the selection, from the start of the first touched
/// line to the end of the last. Excludes the trailing newline.
fn touched_lines<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> String {
    let start = start_of_line(buffer, selection.start);
    let end = end_of_line(buffer, selection.end);
    buffer.slice(start..end)
}

pub fn inline_punctuation_enabled<B: TextBuffer + ?Sized>(
    buffer: &B,
    selection: Selection,
) -> bool {
    is_single_line_selection(buffer, selection)
}

/// Inline punctuation never reports active; see [`crate::command::Command::is_active`].
pub fn inline_punctuation_active<B: TextBuffer + ?Sized>(
    _buffer: &B,
    _selection: Selection,
) -> bool {
    false
}

pub fn link_enabled<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    if !is_single_line_selection(buffer, selection) {
        return false;
    }
    if line_starts_with_any_checkbox(&touched_lines(buffer, selection)) {
        return false;
    }
    !link_active(buffer, selection)
}

pub fn link_active<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    selection_is_in_link(&buffer.content(), selection.start, selection.end)
}

pub fn checkbox_enabled<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    is_single_line_selection(buffer, selection)
}

pub fn checkbox_active<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    line_starts_with_any_checkbox(&touched_lines(buffer, selection))
}

pub fn ordered_list_enabled<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    is_single_line_selection(buffer, selection)
}

pub fn ordered_list_active<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    ordered_list_number(&touched_lines(buffer, selection)).is_some()
}

pub fn list_symbol_enabled<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    is_single_line_selection(buffer, selection)
}

pub fn list_symbol_active<B: TextBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    detect_list(&touched_lines(buffer, selection)).is_some()
}
