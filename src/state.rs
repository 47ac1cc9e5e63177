//! Snapshot of every command's enabled/active state for one buffer revision.

use std::collections::BTreeMap;
use std::thread;

use serde::Serialize;
use tracing::warn;

use crate::buffer::TextBuffer;
use crate::command::Command;
use crate::selection::Selection;

/// Resolved state of a single command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommandState {
    pub enabled: bool,
    pub active: bool,
}

/// Immutable snapshot of all command states plus the host's accent color.
///
/// Two snapshots compare equal iff every command state and the color match;
/// listeners rely on that to suppress duplicate notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    commands: BTreeMap<Command, CommandState>,
    color: u32,
}

impl EditorState {
    /// Resolve every command against the given buffer and selection.
    ///
    /// Each command's predicates run on their own thread; the call returns
    /// once all have finished. A panicking predicate (a stale selection can
    /// trip the bounds assertions) is logged and reported as disabled and
    /// inactive rather than poisoning the whole snapshot.
    ///
    /// `editor_enabled` is the host-wide switch: when false every command
    /// reports disabled while active flags are still resolved.
    pub fn build<B>(buffer: &B, selection: Selection, editor_enabled: bool, color: u32) -> Self
    where
        B: TextBuffer + Sync + ?Sized,
    {
        let commands = thread::scope(|scope| {
            let handles: Vec<_> = Command::ALL
                .into_iter()
                .map(|command| {
                    let handle = scope.spawn(move || CommandState {
                        enabled: editor_enabled && command.is_enabled(buffer, selection),
                        active: command.is_active(buffer, selection),
                    });
                    (command, handle)
                })
                .collect();
            handles
                .into_iter()
                .map(|(command, handle)| {
                    let state = handle.join().unwrap_or_else(|_| {
                        warn!(?command, "state predicate panicked, reporting disabled");
                        CommandState::default()
                    });
                    (command, state)
                })
                .collect::<BTreeMap<_, _>>()
        });
        Self { commands, color }
    }

    pub fn command_state(&self, command: Command) -> CommandState {
        self.commands.get(&command).copied().unwrap_or_default()
    }

    pub fn commands(&self) -> &BTreeMap<Command, CommandState> {
        &self.commands
    }

    pub fn color(&self) -> u32 {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::StringBuffer;

    #[test]
    fn test_snapshot_covers_every_command() {
        let buf = StringBuffer::from_text("hello");
        let state = EditorState::build(&buf, Selection::new(0, 5), true, 0);
        assert_eq!(state.commands().len(), Command::ALL.len());
    }

    #[test]
    fn test_single_line_selection_enables_commands() {
        let buf = StringBuffer::from_text("- [ ] item");
        let state = EditorState::build(&buf, Selection::caret(7), true, 0);
        assert!(state.command_state(Command::ToggleBold).enabled);
        assert!(state.command_state(Command::ToggleCheckboxList).enabled);
        assert!(state.command_state(Command::ToggleCheckboxList).active);
        // a checkbox line never takes a link
        assert!(!state.command_state(Command::InsertLink).enabled);
    }

    #[test]
    fn test_multiline_selection_disables_everything() {
        let buf = StringBuffer::from_text("one\ntwo");
        let state = EditorState::build(&buf, Selection::new(0, 7), true, 0);
        for command in Command::ALL {
            assert!(!state.command_state(command).enabled, "{command:?}");
        }
    }

    #[test]
    fn test_disabled_editor_still_reports_active() {
        let buf = StringBuffer::from_text("- item");
        let state = EditorState::build(&buf, Selection::caret(3), false, 0);
        let unordered = state.command_state(Command::ToggleUnorderedList);
        assert!(!unordered.enabled);
        assert!(unordered.active);
    }

    #[test]
    fn test_out_of_bounds_selection_degrades_to_disabled() {
        let buf = StringBuffer::from_text("ab");
        let state = EditorState::build(&buf, Selection::new(0, 99), true, 0);
        for command in Command::ALL {
            assert_eq!(state.command_state(command), CommandState::default());
        }
    }

    #[test]
    fn test_equal_snapshots_compare_equal() {
        let buf = StringBuffer::from_text("text");
        let sel = Selection::new(0, 4);
        let a = EditorState::build(&buf, sel, true, 0xAB_CD_EF);
        let b = EditorState::build(&buf, sel, true, 0xAB_CD_EF);
        assert_eq!(a, b);
        let c = EditorState::build(&buf, sel, true, 0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_to_json_object_per_command() {
        let buf = StringBuffer::from_text("x");
        let state = EditorState::build(&buf, Selection::caret(0), true, 7);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["color"], 7);
        assert_eq!(json["commands"]["toggle_bold"]["enabled"], true);
        assert_eq!(json["commands"]["insert_link"]["active"], false);
    }
}
