//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::about::AboutArgs;
use crate::cli::commands::analyze::AnalyzeArgs;

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(about = "SENTINEL CORE - security analysis backed by a generative model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .sentinel/config.yaml and .sentinel/local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an analysis module against code, a question or a scenario
    Analyze(AnalyzeArgs),

    /// List modules and how each one calls the model
    Modules,

    /// Describe the platform and the technology behind each module
    About(AboutArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// `sentinel config ...`
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration (credential redacted)
    Show,
}
