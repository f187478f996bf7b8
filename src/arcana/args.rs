use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arcana", version)]
#[command(about = "Draw tarot spreads and keep a journal of readings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for the card shuffle, for repeatable draws
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a spread and show its reading
    #[command(alias = "d")]
    Draw {
        /// Layout to draw (see `arcana layouts`)
        #[arg(default_value = "single")]
        layout: String,

        /// Reading category, e.g. general, love, career
        #[arg(short, long, default_value = "")]
        category: String,

        /// The question asked
        #[arg(short, long, default_value = "")]
        question: String,

        /// Personal note stored with the reading
        #[arg(short, long, default_value = "")]
        note: String,

        /// Save the reading to the history
        #[arg(short, long)]
        save: bool,

        /// Write a plain-text transcript to this file or directory
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// List saved readings, newest first
    #[command(aliases = ["ls", "list"])]
    History,

    /// Show one or more saved readings in full
    #[command(alias = "v")]
    Show {
        /// History indexes (1 is the newest reading)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more saved readings
    #[command(alias = "rm")]
    Delete {
        /// History indexes (1 is the newest reading)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Export a saved reading as plain text
    Export {
        /// History index (1 is the newest reading)
        index: String,

        /// File or directory to write to; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available layouts
    Layouts,

    /// Get or set configuration
    Config {
        /// Configuration key (deck-path, default-category, storage-key)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
