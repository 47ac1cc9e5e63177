//! Formatting commands and their dispatch.
//!
//! Every [`Command`] is bound to one state resolver (enabled/active
//! predicates) and one applier (the buffer rewrite). The binding is a plain
//! `match` per operation; commands carry no state of their own.

pub mod applier;
pub mod link;
pub mod punctuation;
pub mod resolver;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::buffer::{TextBuffer, TextBufferMut};
use crate::selection::Selection;
use self::punctuation::InlineMarker;

/// A named formatting operation.
///
/// `ToggleBlockQuote` and `ToggleCodeBlock` currently share the unordered-list
/// resolver/applier pair; the three list-shaped commands are interchangeable
/// at the engine level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ToggleBold,
    ToggleItalic,
    ToggleStrikethrough,
    InsertLink,
    ToggleCheckboxList,
    ToggleUnorderedList,
    ToggleOrderedList,
    ToggleBlockQuote,
    ToggleCodeBlock,
}

impl Command {
    /// All commands, in declaration order.
    pub const ALL: [Command; 9] = [
        Command::ToggleBold,
        Command::ToggleItalic,
        Command::ToggleStrikethrough,
        Command::InsertLink,
        Command::ToggleCheckboxList,
        Command::ToggleUnorderedList,
        Command::ToggleOrderedList,
        Command::ToggleBlockQuote,
        Command::ToggleCodeBlock,
    ];

    fn inline_marker(self) -> Option<InlineMarker> {
        match self {
            Command::ToggleBold => Some(InlineMarker::Bold),
            Command::ToggleItalic => Some(InlineMarker::Italic),
            Command::ToggleStrikethrough => Some(InlineMarker::Strikethrough),
            _ => None,
        }
    }

    /// Whether this command may legally be applied at the given selection.
    ///
    /// # Panics
    ///
    /// Panics if the selection is out of bounds for the buffer.
    pub fn is_enabled<B: TextBuffer + ?Sized>(self, buffer: &B, selection: Selection) -> bool {
        match self {
            Command::ToggleBold | Command::ToggleItalic | Command::ToggleStrikethrough => {
                resolver::inline_punctuation_enabled(buffer, selection)
            }
            Command::InsertLink => resolver::link_enabled(buffer, selection),
            Command::ToggleCheckboxList => resolver::checkbox_enabled(buffer, selection),
            Command::ToggleOrderedList => resolver::ordered_list_enabled(buffer, selection),
            Command::ToggleUnorderedList
            | Command::ToggleBlockQuote
            | Command::ToggleCodeBlock => resolver::list_symbol_enabled(buffer, selection),
        }
    }

    /// Whether this command is currently applied at the given selection.
    ///
    /// Inline punctuation commands always report `false`; toggling them is
    /// stateless from the host's point of view.
    pub fn is_active<B: TextBuffer + ?Sized>(self, buffer: &B, selection: Selection) -> bool {
        match self {
            Command::ToggleBold | Command::ToggleItalic | Command::ToggleStrikethrough => {
                resolver::inline_punctuation_active(buffer, selection)
            }
            Command::InsertLink => resolver::link_active(buffer, selection),
            Command::ToggleCheckboxList => resolver::checkbox_active(buffer, selection),
            Command::ToggleOrderedList => resolver::ordered_list_active(buffer, selection),
            Command::ToggleUnorderedList
            | Command::ToggleBlockQuote
            | Command::ToggleCodeBlock => resolver::list_symbol_active(buffer, selection),
        }
    }

    /// Apply this command, mutating the buffer in place.
    ///
    /// Returns the new caret position. Refuses without touching the buffer
    /// when [`Command::is_enabled`] is false; callers are expected to check
    /// first.
    pub fn apply<B: TextBufferMut + ?Sized>(
        self,
        buffer: &mut B,
        selection: Selection,
        context: &CommandContext,
    ) -> Result<usize, CommandError> {
        if !self.is_enabled(buffer, selection) {
            return Err(CommandError::NotEnabled(self));
        }
        let caret = match self {
            Command::ToggleBold | Command::ToggleItalic | Command::ToggleStrikethrough => {
                // inline_marker is Some for exactly these variants
                let marker = self.inline_marker().ok_or(CommandError::NotEnabled(self))?;
                punctuation::toggle_punctuation(buffer, selection, marker)
            }
            Command::InsertLink => {
                link::insert_link(buffer, selection, context.clipboard_url.as_deref())
            }
            Command::ToggleCheckboxList => applier::toggle_checkbox_list(buffer, selection),
            Command::ToggleOrderedList => applier::toggle_ordered_list(buffer, selection),
            Command::ToggleUnorderedList
            | Command::ToggleBlockQuote
            | Command::ToggleCodeBlock => applier::toggle_list_symbol(buffer, selection),
        };
        Ok(caret)
    }
}

/// Host-provided collaborators for command application.
///
/// The clipboard URL is the only one so far; it is injected rather than read
/// from global state so tests and headless hosts can supply their own.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub clipboard_url: Option<String>,
}

impl CommandContext {
    pub fn with_clipboard_url(url: impl Into<String>) -> Self {
        Self {
            clipboard_url: Some(url.into()),
        }
    }
}

/// Errors surfaced by command application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command's resolver rejected the selection; the buffer is untouched.
    #[error("command {0:?} is not enabled for the current selection")]
    NotEnabled(Command),
}
