//! Inkmark - markdown formatting command engine
//!
//! This crate provides the command, state and notification logic an editor
//! host needs to offer markdown formatting actions: toggling inline
//! punctuation, list and checkbox prefixes, inserting links, and resolving
//! which actions are enabled and active at a given selection.
//!
//! All offsets are character offsets, never bytes.

pub mod buffer;
pub mod cli;
pub mod command;
pub mod list_type;
pub mod notifier;
pub mod scan;
pub mod selection;
pub mod state;
pub mod tasklist;
pub mod tracing;

// Re-export commonly used types
pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use command::{Command, CommandContext, CommandError};
pub use list_type::ListType;
pub use notifier::{EditorStateListener, EditorStateNotifier};
pub use selection::Selection;
pub use state::{CommandState, EditorState};
