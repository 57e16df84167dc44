//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// docroute command line
#[derive(Parser, Debug)]
#[command(name = "docroute")]
#[command(author, version, about = "Resolve URL paths to Markdown documents", long_about = None)]
pub struct Cli {
    /// Content root holding the Markdown tree
    #[arg(short, long, global = true, env = "DOCROUTE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to docroute.toml in the content root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the file a URL path resolves to
    ///
    /// Examples:
    ///   docroute resolve /                  # index.md
    ///   docroute resolve /my-folder/page    # "my folder/page.md"
    Resolve {
        /// URL path, starting with '/'
        url: String,
    },

    /// Show a document's metadata and rendered HTML
    Show {
        /// URL path, starting with '/'
        url: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Print the Markdown body instead of HTML
        #[arg(long)]
        raw: bool,
    },

    /// Write a document to the file a URL path targets
    Write {
        /// URL path, starting with '/'
        url: String,

        /// Metadata entry as key=value (repeatable). Values that parse as
        /// JSON keep their type; anything else is stored as a string.
        #[arg(short, long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,

        /// Markdown body
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,

        /// Read the Markdown body from a file
        #[arg(long, value_name = "FILE")]
        body_file: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}
