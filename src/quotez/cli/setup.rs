use clap::{Parser, Subcommand};
use quotez::api::DEFAULT_EXPORT_FILENAME;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotez", bin_name = "quotez", version)]
#[command(about = "Keep, browse and sync a collection of quotes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding quotes.json, category and config.json
    #[arg(long, global = true, env = "QUOTEZ_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a random quote from the selected (or given) category
    #[command(alias = "r")]
    Random {
        /// Category to pick from instead of the selected one
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the last displayed quote, or a random one
    Show,

    /// Add a new quote
    #[command(alias = "n")]
    Add {
        /// Quote text
        text: String,

        /// Quote category
        category: String,

        /// Who said it
        #[arg(short, long)]
        author: Option<String>,
    },

    /// List quotes in the selected (or given) category
    #[command(alias = "ls")]
    List {
        /// Category to list instead of the selected one ("all" for everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories
    Categories,

    /// Select the category used by random, show and list
    Category {
        /// Category name, or "all"
        name: String,
    },

    /// Append quotes from a JSON file
    Import {
        /// JSON file holding an array of quote objects
        file: PathBuf,
    },

    /// Write all quotes as JSON
    Export {
        /// Output file, "-" for stdout
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
        output: String,
    },

    /// Fetch remote quotes and merge them now
    Sync,

    /// Sync periodically until interrupted
    Watch {
        /// Seconds between syncs (defaults to the configured interval)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Remove saved quotes and restore the defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., merge-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
