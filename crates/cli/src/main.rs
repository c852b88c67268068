use std::process::ExitCode;

use anyhow::Context;
use leavechain_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use leavechain_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(LoadOptions::default()).context("loading configuration")?;
    init_logging(&config);
    Ok(leavechain_cli::run())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(2)
        }
    }
}
