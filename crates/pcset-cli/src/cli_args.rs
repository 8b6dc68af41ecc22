//! CLI argument definitions for the pcset command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// pcset - Pitch-Class Set Analysis
#[derive(Parser)]
#[command(name = "pcset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Show pipeline steps on stderr (-v for stages, -vv for tie-breaks)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a JSON config file (default: <config dir>/pcset/config.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Analyze one set: normal form, inversion, prime form and interval-class vector
    Analyze {
        /// Note names, e.g. `C E G` or `"Db F Ab"`
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,

        /// Spell black keys with flats instead of sharps
        #[arg(long)]
        flats: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Prime forms of every subset of a given size
    Combinations {
        /// Space-separated note names to pick from
        #[arg(short, long)]
        notes: String,

        /// Number of notes in each subset
        #[arg(short, long)]
        pick: usize,

        /// Spell black keys with flats instead of sharps
        #[arg(long)]
        flats: bool,

        /// List every subset before the results
        #[arg(long)]
        show_subsets: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Prompt for notes and pick sizes until end of input
    Interactive {
        /// Spell black keys with flats instead of sharps
        #[arg(long)]
        flats: bool,

        /// List every subset before the results
        #[arg(long)]
        show_subsets: bool,
    },
}
