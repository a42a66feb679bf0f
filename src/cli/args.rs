//! CLI argument definitions using clap
//!
//! Commands:
//! - product-service init [--config <path>]
//! - product-service serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// product-service - CRUD HTTP service for products
#[derive(Parser, Debug)]
#[command(name = "product-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and product table
    Init {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Open the database and serve the HTTP API
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
