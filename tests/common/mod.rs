//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use inkmark::{Command, CommandContext, EditorState, Selection, StringBuffer, TextBuffer};

/// Apply a command to text and return the rewritten content plus caret.
pub fn apply(command: Command, text: &str, start: usize, end: usize) -> (String, usize) {
    apply_with_context(command, text, start, end, &CommandContext::default())
}

/// Apply a command with a clipboard URL available.
pub fn apply_with_url(
    command: Command,
    text: &str,
    start: usize,
    end: usize,
    url: &str,
) -> (String, usize) {
    apply_with_context(
        command,
        text,
        start,
        end,
        &CommandContext::with_clipboard_url(url),
    )
}

pub fn apply_with_context(
    command: Command,
    text: &str,
    start: usize,
    end: usize,
    context: &CommandContext,
) -> (String, usize) {
    let mut buffer = StringBuffer::from_text(text);
    let caret = command
        .apply(&mut buffer, Selection::new(start, end), context)
        .unwrap_or_else(|e| panic!("applying {command:?} to {text:?}: {e}"));
    (buffer.content(), caret)
}

/// Build an editor state snapshot for text with the editor enabled.
pub fn state(text: &str, start: usize, end: usize) -> EditorState {
    let buffer = StringBuffer::from_text(text);
    EditorState::build(&buffer, Selection::new(start, end), true, 0)
}
