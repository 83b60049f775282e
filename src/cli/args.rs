//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants;

/// Per-interface network traffic monitor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sampling interval in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = constants::DEFAULT_INTERVAL_SECS
    )]
    pub interval: f64,

    /// Path to the JSON config file naming the interface to monitor
    #[arg(long, value_name = "FILE", default_value = constants::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the network interfaces known to the OS counter source
    Interfaces,
}
