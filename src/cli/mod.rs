//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Caravan using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Caravan - chunked customer import tool
#[derive(Parser, Debug)]
#[command(name = "caravan")]
#[command(version, about, long_about = None)]
#[command(author = "Caravan Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "caravan.toml", env = "CARAVAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CARAVAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trigger one import run with the configured reader/writer pairing
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
