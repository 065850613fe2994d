// Command line arguments for the two tools, parsed with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::purge::DEFAULT_IMAGE_FOLDER;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    about = "Deletes images from a folder, or translates text with DeepL",
    long_about = None
)]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The available tools.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete every image file directly inside a folder.
    Purge {
        /// Folder to purge.
        #[arg(default_value = DEFAULT_IMAGE_FOLDER)]
        folder: PathBuf,
    },

    /// Translate text interactively until `exit` is entered.
    Translate,

    /// Translate a single text and exit.
    TranslateText {
        /// The text to translate.
        text: String,

        /// Target language code, e.g. "es".
        #[arg(short, long = "to")]
        to: String,
    },
}
