//! CLI command handlers.

use color_eyre::Result;

use crate::cli::args::Commands;
use crate::core::sampler::{CounterSource, SystemCounters};

/// Handles CLI commands that don't start the monitor.
///
/// Returns `true` if the command was handled and the program should exit,
/// or `false` if monitoring should start.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Interfaces => {
            handle_interfaces();
            Ok(true)
        }
    }
}

/// Prints the interfaces the counter source currently knows about.
fn handle_interfaces() {
    let mut source = SystemCounters;
    let names = source.interface_names();
    if names.is_empty() {
        eprintln!("No network interfaces found");
        std::process::exit(1);
    }
    for name in names {
        println!("{name}");
    }
}
