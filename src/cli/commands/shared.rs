//! Shared components for CLI commands
//!
//! This module contains logging setup, layered configuration loading and
//! summary reporting used across the command implementations.

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::field_cursor::{CursorCheck, ParseStats};
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    let mut config = Config::load(args.config_file.as_deref())?;

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &GlobalArgs) {
    if args.legacy_cursor_check {
        config.parser.cursor_check = CursorCheck::Current;
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(config: &Config, args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = config.logging.level.as_str();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a run summary to stderr
pub fn report_stats(stats: &ParseStats) {
    info!(
        "Parsed {} of {} rows ({:.1}%)",
        stats.records_parsed,
        stats.total_records,
        stats.success_rate()
    );

    let rate = format!("{:.1}%", stats.success_rate());
    let rate = if stats.is_successful() {
        rate.bright_green()
    } else {
        rate.bright_red()
    };

    eprintln!(
        "{} {} rows, {} parsed, {} skipped ({})",
        "Summary:".bold(),
        stats.total_records,
        stats.records_parsed.to_string().bright_green(),
        stats.records_skipped.to_string().bright_yellow(),
        rate
    );

    for error in &stats.errors {
        eprintln!("  {}", error.bright_black());
    }
}
