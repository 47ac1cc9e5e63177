//! Command-line argument parsing.
//!
//! Two subcommands: `state` inspects which commands are enabled and active
//! at a position, `apply` runs one command against a file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::command::Command;

/// Markdown formatting command engine
#[derive(Parser, Debug)]
#[command(name = "inkmark", version, about = "Markdown formatting command engine")]
pub struct CliArgs {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the resolved command states for a selection as JSON
    State {
        /// Markdown file to inspect
        file: PathBuf,

        /// Selection start as a character offset
        #[arg(long, default_value_t = 0, value_name = "N")]
        cursor: usize,

        /// Selection end as a character offset (defaults to the cursor)
        #[arg(long, value_name = "N")]
        end: Option<usize>,

        /// Accent color reported alongside the state
        #[arg(long, default_value_t = 0x0082C9, value_name = "RGB")]
        color: u32,
    },

    /// Apply a formatting command and print the rewritten content
    Apply {
        /// The command to apply
        #[arg(value_enum)]
        command: Command,

        /// Markdown file to rewrite
        file: PathBuf,

        /// Selection start as a character offset
        #[arg(long, default_value_t = 0, value_name = "N")]
        cursor: usize,

        /// Selection end as a character offset (defaults to the cursor)
        #[arg(long, value_name = "N")]
        end: Option<usize>,

        /// Link target for insert-link, as if read from the clipboard
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Rewrite the file instead of printing to stdout
        #[arg(short, long)]
        in_place: bool,
    },
}
