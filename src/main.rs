//! # nettraf
//!
//! Per-interface network traffic monitor. Samples the operating system's
//! cumulative byte counters for one named interface at a fixed interval and
//! reports the sent/received delta of each tick to a log file and the
//! console.
//!
//! ## Modules
//! - [`cli`]: Command-line argument parsing.
//! - [`config`]: JSON configuration loading.
//! - [`core`]: The sampler loop.
//! - [`logger`]: Leveled file logging.
//! - [`platform`]: OS counter sources.

mod cli;
mod config;
mod constants;
mod core;
mod logger;
mod platform;
mod utils;

use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;
use color_eyre::Result;

use crate::cli::args::Args;
use crate::core::sampler::{self, CancelToken, SystemCounters};
use crate::logger::Logger;

/// Token cancelled by the shutdown signal handler; installed once at startup.
static SHUTDOWN_TOKEN: OnceLock<CancelToken> = OnceLock::new();

extern "C" fn handle_shutdown_signal(_sig: libc::c_int) {
    if let Some(token) = SHUTDOWN_TOKEN.get() {
        token.cancel();
    }
}

/// Wires SIGINT and SIGTERM to a cancellation token so the sampler exits
/// cleanly (flushing its log) instead of dying mid-write.
#[allow(unsafe_code)]
fn install_shutdown_handler() -> CancelToken {
    let token = SHUTDOWN_TOKEN.get_or_init(CancelToken::new).clone();

    // SAFETY: the handler only performs an atomic store through the token,
    // which is async-signal-safe. The token is initialized before the
    // handler is installed, so the handler never races its creation.
    unsafe {
        libc::signal(libc::SIGINT, handle_shutdown_signal as libc::sighandler_t);
        libc::signal(libc::SIGTERM, handle_shutdown_signal as libc::sighandler_t);
    }

    token
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse arguments
    let args = Args::parse();

    // Subcommands short-circuit before any logging or monitoring starts
    if let Some(command) = &args.command {
        if cli::commands::handle_command(command)? {
            return Ok(());
        }
    }

    let mut logger = match Logger::open(Path::new(constants::LOG_FILE_NAME)) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: cannot open {}: {e}", constants::LOG_FILE_NAME);
            std::process::exit(1);
        }
    };

    let monitor_config = config::load_config(&args.config, &mut logger);

    // Reject a non-positive interval before the sampler loop ever runs
    if let Err(e) = sampler::validate_interval(args.interval) {
        logger.error(constants::LOG_CAT_MAIN, &e.to_string());
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    logger.info(
        constants::LOG_CAT_MAIN,
        &format!("{} v{}", constants::APP_NAME, constants::APP_VERSION),
    );
    logger.info(
        constants::LOG_CAT_MAIN,
        &format!("Starting traffic monitor with interval {}s", args.interval),
    );

    let cancel = install_shutdown_handler();
    let mut source = SystemCounters;

    match sampler::run(
        args.interval,
        monitor_config.interface.as_deref(),
        &mut source,
        &mut logger,
        &cancel,
    ) {
        Ok(()) => {
            logger.info(constants::LOG_CAT_MAIN, "Shutdown requested, exiting");
            Ok(())
        }
        Err(e) => {
            logger.error(
                constants::LOG_CAT_MAIN,
                &format!("Traffic monitoring failed: {e}"),
            );
            eprintln!("Error: {e}");
            logger.flush();
            std::process::exit(1);
        }
    }
}
