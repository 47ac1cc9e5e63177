//! Markdown link insertion.
//!
//! Behavior splits on the selection shape. A caret inside a word wraps the
//! whole word; a caret next to whitespace (or at a buffer edge) inserts an
//! empty link template; a selection becomes the link text, or the link
//! target when it already looks like a URL. A clipboard URL, when present,
//! is pre-filled as the target.

use crate::buffer::TextBufferMut;
use crate::selection::Selection;

fn link_template(url: Option<&str>) -> String {
    format!("[]({})", url.unwrap_or(""))
}

/// Insert a link at the selection and return the new caret position.
///
/// The caret lands where the missing piece goes: inside the brackets when
/// the target is known, inside the parentheses otherwise.
pub fn insert_link<B: TextBufferMut + ?Sized>(
    buffer: &mut B,
    selection: Selection,
    clipboard_url: Option<&str>,
) -> usize {
    let url_len = clipboard_url.map(|u| u.chars().count()).unwrap_or(0);

    if selection.is_caret() {
        let pos = selection.start;
        let len = buffer.len_chars();
        if pos == 0 || pos >= len {
            buffer.insert(pos, &link_template(clipboard_url));
            return pos + 1;
        }

        let before = buffer.char_at(pos - 1).map(char::is_whitespace).unwrap_or(true);
        let at = buffer.char_at(pos).map(char::is_whitespace).unwrap_or(true);
        if before || at {
            // next to whitespace: pad the non-whitespace side, then drop in
            // the template
            let mut insert_at = pos;
            if !before {
                buffer.insert(insert_at, " ");
                insert_at += 1;
            }
            if !at {
                buffer.insert(pos, " ");
            }
            buffer.insert(insert_at, &link_template(clipboard_url));
            insert_at + 1
        } else {
            // inside a word: wrap the whole word
            let mut word_start = pos;
            while word_start > 0
                && !buffer
                    .char_at(word_start - 1)
                    .map(char::is_whitespace)
                    .unwrap_or(true)
            {
                word_start -= 1;
            }
            let mut word_end = pos;
            while word_end < len
                && !buffer
                    .char_at(word_end)
                    .map(char::is_whitespace)
                    .unwrap_or(true)
            {
                word_end += 1;
            }
            buffer.insert(word_start, "[");
            buffer.insert(
                word_end + 1,
                &format!("]({})", clipboard_url.unwrap_or("")),
            );
            word_end + 3 + url_len
        }
    } else {
        let selected_is_url = buffer.slice(selection.start..selection.end).starts_with("http");
        let mut end = selection.end;
        if selected_is_url {
            match clipboard_url {
                None => {
                    buffer.insert(end, ")");
                    buffer.insert(selection.start, "[](");
                }
                Some(url) => {
                    buffer.insert(end, &format!("]({url})"));
                    buffer.insert(selection.start, "[");
                    end += url_len;
                }
            }
        } else {
            match clipboard_url {
                None => buffer.insert(end, "]()"),
                Some(url) => {
                    buffer.insert(end, &format!("]({url})"));
                    end += url_len;
                }
            }
            buffer.insert(selection.start, "[");
        }
        if selected_is_url && clipboard_url.is_none() {
            selection.start + 1
        } else {
            end + 3
        }
    }
}
