//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list / categories: browse the catalog
//! - search: rank tools against a query
//! - show / open: inspect a tool or load its component
//! - routes / check: route table and registry validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolshed - a catalog of single-purpose developer utilities
#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `categories`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tools in registration order
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tools grouped by category
    Categories,

    /// Search tools by name, description and keywords
    Search {
        /// Query terms (all must match)
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of results (at least 1)
        #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Disable fuzzy matching
        #[arg(short, long)]
        exact: bool,
    },

    /// Show a tool's metadata
    Show {
        /// Tool path, e.g. /qrcode-generator (redirects resolve)
        path: String,
    },

    /// Load and render a tool's component
    Open {
        /// Tool path, e.g. /random-port-generator (redirects resolve)
        path: String,
    },

    /// Print the route table, including redirect aliases
    Routes,

    /// Validate the registry and report its size
    Check,
}
