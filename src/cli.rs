use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faqdash")]
#[command(about = "Kiosk FAQ browser with TUI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML catalog file replacing the built-in dataset (overrides config)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Start with chrome hidden, kiosk style (overrides config)
    #[arg(long, conflicts_with = "no_kiosk")]
    pub kiosk: bool,

    /// Start with full chrome visible (overrides config)
    #[arg(long, conflicts_with = "kiosk")]
    pub no_kiosk: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the derived category list
    Categories,

    /// Search the catalog and print matching records
    Search {
        /// Search text (matched against question, answer, and category)
        query: String,

        /// Restrict to one category id (lowercased name)
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Print one record with its formatted answer and related questions
    Show {
        /// FAQ record id
        id: u32,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
