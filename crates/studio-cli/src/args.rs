use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItemCommands, StudioCommands};

/// Back office for studios and their ordered lists
///
/// Manages studios and the lists each of them keeps in a user-chosen order:
/// pipeline stages, phone numbers, commercial conditions and social links.
/// Items can be moved by dragging one onto another (`item move`) or stepped
/// up and down one place at a time.
#[derive(Parser)]
#[command(version, about, name = "studio")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studio/studio.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How many times a save is attempted while the database is locked
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub retry_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage studios
    #[command(alias = "s")]
    Studio {
        #[command(subcommand)]
        command: StudioCommands,
    },
    /// Manage the ordered lists of a studio
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
}
