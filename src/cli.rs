//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Inspect the storefront settings resolved from the current environment
#[derive(Parser, Debug)]
#[command(name = "storefront-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the settings record and print it as JSON
    Show(ShowArgs),

    /// Report integration credentials missing from the environment
    Check,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print secrets verbatim instead of masking them
    #[arg(long)]
    pub reveal_secrets: bool,

    /// Include the Redis-backed event bus and cache modules
    #[arg(long)]
    pub with_redis_modules: bool,
}
