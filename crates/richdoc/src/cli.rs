//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "richdoc")]
#[command(version, about = "Convert between HTML and rich-text documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to richdoc.toml (defaults to ./richdoc.toml when present)
    #[arg(long, global = true, env = "RICHDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an HTML fragment to document JSON
    ToDoc {
        /// HTML file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Render document JSON to HTML
    ToHtml {
        /// Document JSON file (stdin when omitted or "-")
        input: Option<PathBuf>,
    },

    /// Segment a document into content blocks
    Segment {
        /// Document JSON file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Treat the input as HTML and convert it first
        #[arg(long)]
        html: bool,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
