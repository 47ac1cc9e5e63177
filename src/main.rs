use std::fs;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use inkmark::buffer::{RopeBuffer, TextBuffer};
use inkmark::cli::{Action, CliArgs};
use inkmark::command::CommandContext;
use inkmark::selection::Selection;
use inkmark::state::EditorState;

fn main() -> Result<()> {
    inkmark::tracing::init();
    let args = CliArgs::parse();

    match args.action {
        Action::State {
            file,
            cursor,
            end,
            color,
        } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let buffer = RopeBuffer::from_text(&content);
            let selection = selection_for(&buffer, cursor, end)?;
            let state = EditorState::build(&buffer, selection, true, color);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Action::Apply {
            command,
            file,
            cursor,
            end,
            url,
            in_place,
        } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let mut buffer = RopeBuffer::from_text(&content);
            let selection = selection_for(&buffer, cursor, end)?;
            let context = CommandContext { clipboard_url: url };
            let caret = command.apply(&mut buffer, selection, &context)?;
            if in_place {
                fs::write(&file, buffer.content())
                    .with_context(|| format!("failed to write {}", file.display()))?;
                eprintln!("caret: {caret}");
            } else {
                let result = serde_json::json!({
                    "content": buffer.content(),
                    "caret": caret,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
    }

    Ok(())
}

fn selection_for<B: TextBuffer>(buffer: &B, cursor: usize, end: Option<usize>) -> Result<Selection> {
    let end = end.unwrap_or(cursor);
    ensure!(
        cursor <= end,
        "selection end ({end}) must not precede the cursor ({cursor})"
    );
    let len = buffer.len_chars();
    ensure!(
        end <= len,
        "selection ({cursor}, {end}) exceeds buffer length of {len} characters"
    );
    Ok(Selection::new(cursor, end))
}
