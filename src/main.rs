//! Topic Dedup - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use topic_dedup::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::{print_error, print_info, print_summary},
    pipeline::run_deduplication,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            // Missing inputs are reported without failing the process
            if e.is_input_missing() {
                ExitCode::from(exit_codes::SUCCESS as u8)
            } else if e.is_config_error() {
                ExitCode::from(exit_codes::CONFIG_ERROR as u8)
            } else {
                ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8)
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    print_info(&format!(
        "Deduplicating {} against other subjects",
        config.base_filename
    ));

    let report = run_deduplication(&config)?;
    print_summary(&report);

    Ok(())
}
