//! Line-prefix appliers for the checkbox, ordered-list and list-symbol
//! command families. Each works on the full line(s) the selection touches.

use crate::buffer::TextBufferMut;
use crate::list_type::{detect_checkbox, detect_list, ListType};
use crate::scan::{end_of_line, ordered_list_number, start_of_line};
use crate::selection::Selection;

/// The line the previous character belongs to, without its trailing newline.
fn previous_line<B: TextBufferMut + ?Sized>(buffer: &B, start_of_line: usize) -> Option<String> {
    if start_of_line == 0 {
        return None;
    }
    let prev_start = crate::scan::start_of_line(buffer, start_of_line - 1);
    let line = buffer.slice(prev_start..start_of_line);
    Some(line.strip_suffix('\n').map(str::to_owned).unwrap_or(line))
}

/// Toggle an unchecked checkbox prefix on the selected line.
///
/// Inserting adopts the bullet style of the previous line's checkbox, if it
/// has one. Removing strips the marker with its trailing space, or without
/// it when the line holds nothing but the marker.
pub fn toggle_checkbox_list<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    selection: Selection,
) -> usize {
    let sol = start_of_line(buffer, selection.start);
    let eol = end_of_line(buffer, selection.end);
    let line = buffer.slice(sol..eol);

    match detect_checkbox(&line) {
        None => {
            let style = previous_line(buffer, sol)
                .as_deref()
                .and_then(detect_checkbox)
                .unwrap_or(ListType::Dash);
            let marker = style.checkbox_unchecked_with_trailing_space();
            buffer.insert(sol, marker);
            selection.end + marker.len()
        }
        Some(style) => {
            let with_space = style.checkbox_unchecked_with_trailing_space().len();
            let bare = style.checkbox_unchecked().len();
            let strip = if sol + with_space > eol { bare } else { with_space };
            buffer.remove(sol..sol + strip);
            selection.end.saturating_sub(strip)
        }
    }
}

/// Toggle an ordered-list prefix on the selected line.
///
/// A fresh item takes the previous line's number, or 1 when the previous
/// line is not an ordered item. Following lines are not renumbered.
pub fn toggle_ordered_list<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    selection: Selection,
) -> usize {
    let sol = start_of_line(buffer, selection.start);
    let eol = end_of_line(buffer, selection.end);
    let line = buffer.slice(sol..eol);

    match ordered_list_number(&line) {
        Some(number) => {
            let strip = number.to_string().len() + ". ".len();
            buffer.remove(sol..sol + strip);
            selection.end.saturating_sub(strip)
        }
        None => {
            let number = previous_line(buffer, sol)
                .as_deref()
                .and_then(ordered_list_number)
                .unwrap_or(1);
            let prefix = format!("{number}. ");
            buffer.insert(sol, &prefix);
            selection.start + prefix.len()
        }
    }
}

/// Toggle a plain list bullet on the selected line. Serves the unordered
/// list, block quote and code block commands alike.
///
/// Inserting adopts the previous line's bullet style, defaulting to a dash.
pub fn toggle_list_symbol<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    selection: Selection,
) -> usize {
    let sol = start_of_line(buffer, selection.start);
    let eol = end_of_line(buffer, selection.end);
    let line = buffer.slice(sol..eol);

    match detect_list(&line) {
        Some(style) => {
            let strip = style.list_symbol_with_trailing_space().len();
            buffer.remove(sol..sol + strip);
            selection.end.saturating_sub(strip)
        }
        None => {
            let style = previous_line(buffer, sol)
                .as_deref()
                .and_then(detect_list)
                .unwrap_or(ListType::Dash);
            let symbol = style.list_symbol_with_trailing_space();
            buffer.insert(sol, symbol);
            selection.start + symbol.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{StringBuffer, TextBuffer};

    fn apply(
        f: impl Fn(&mut StringBuffer, Selection) -> usize,
        input: &str,
        start: usize,
        end: usize,
    ) -> (String, usize) {
        let mut buf = StringBuffer::from_text(input);
        let caret = f(&mut buf, Selection::new(start, end));
        (buf.content(), caret)
    }

    #[test]
    fn test_checkbox_insert_on_plain_line() {
        let (content, caret) = apply(toggle_checkbox_list, "Hello", 0, 0);
        assert_eq!(content, "- [ ] Hello");
        assert_eq!(caret, 6);
    }

    #[test]
    fn test_checkbox_insert_adopts_previous_line_style() {
        let (content, caret) = apply(toggle_checkbox_list, "* [ ] first\nsecond", 12, 12);
        assert_eq!(content, "* [ ] first\n* [ ] second");
        assert_eq!(caret, 18);
    }

    #[test]
    fn test_checkbox_remove_with_trailing_space() {
        let (content, caret) = apply(toggle_checkbox_list, "- [ ] Hello", 8, 8);
        assert_eq!(content, "Hello");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_checkbox_remove_bare_marker_line() {
        // "- [ ]" has no trailing space to strip
        let (content, caret) = apply(toggle_checkbox_list, "- [ ]", 5, 5);
        assert_eq!(content, "");
        assert_eq!(caret, 0);
    }

    #[test]
    fn test_checkbox_remove_checked_marker() {
        let (content, caret) = apply(toggle_checkbox_list, "- [x] done", 10, 10);
        assert_eq!(content, "done");
        assert_eq!(caret, 4);
    }

    #[test]
    fn test_checkbox_caret_saturates_at_zero() {
        let (content, caret) = apply(toggle_checkbox_list, "- [ ] Hello", 0, 0);
        assert_eq!(content, "Hello");
        assert_eq!(caret, 0);
    }

    #[test]
    fn test_ordered_insert_defaults_to_one() {
        let (content, caret) = apply(toggle_ordered_list, "Hello", 0, 0);
        assert_eq!(content, "1. Hello");
        assert_eq!(caret, 3);
    }

    #[test]
    fn test_ordered_insert_takes_previous_line_number() {
        let (content, caret) = apply(toggle_ordered_list, "3. first\nsecond", 9, 9);
        assert_eq!(content, "3. first\n3. second");
        assert_eq!(caret, 12);
    }

    #[test]
    fn test_ordered_remove_strips_number_and_dot() {
        let (content, caret) = apply(toggle_ordered_list, "3. Hello", 0, 0);
        assert_eq!(content, "Hello");
        assert_eq!(caret, 0);
        let (content, caret) = apply(toggle_ordered_list, "12. Hello", 7, 7);
        assert_eq!(content, "Hello");
        assert_eq!(caret, 3);
    }

    #[test]
    fn test_ordered_insert_on_second_line_after_plain_line() {
        let (content, caret) = apply(toggle_ordered_list, "plain\nHello", 6, 6);
        assert_eq!(content, "plain\n1. Hello");
        assert_eq!(caret, 9);
    }

    #[test]
    fn test_list_symbol_insert_and_remove() {
        let (content, caret) = apply(toggle_list_symbol, "Hello", 2, 2);
        assert_eq!(content, "- Hello");
        assert_eq!(caret, 4);
        let (content, caret) = apply(toggle_list_symbol, "- Hello", 4, 4);
        assert_eq!(content, "Hello");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_list_symbol_adopts_previous_bullet() {
        let (content, caret) = apply(toggle_list_symbol, "+ first\nsecond", 8, 8);
        assert_eq!(content, "+ first\n+ second");
        assert_eq!(caret, 10);
    }

    #[test]
    fn test_list_symbol_only_touches_selected_line() {
        let (content, _) = apply(toggle_list_symbol, "one\ntwo\nthree", 5, 5);
        assert_eq!(content, "one\n- two\nthree");
    }
}
