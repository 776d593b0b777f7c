use crate::args::Cli;
use anyhow::{Context, Result};
use articula::domain::config::{AppConfig, LoggingConfig};
use articula::kernel::config::load_config;
use articula_logger::{LevelFilter, Logger};

/// Loads the layered configuration and applies the command-line overrides on top.
///
/// # Errors
/// Returns an error if an explicit config file is missing or any source is malformed.
pub fn load(cli: &Cli) -> Result<AppConfig> {
    let mut config: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(path) = &cli.dataset {
        config.dataset.path.clone_from(path);
    }
    if let Some(theme) = cli.theme {
        config.display.theme = theme.into();
    }
    if cli.no_color {
        config.display.color = false;
    }
}

/// Installs the global subscriber. Each `-v` raises the configured level by one step.
///
/// # Errors
/// Returns an error for an unknown level name or when the log directory is unusable.
pub fn init_logger(config: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let level = raise(Logger::parse_level(&config.level)?, verbose);
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    let builder = match &config.filter {
        Some(filter) => builder.directives(filter),
        None => builder,
    };

    let logger = match &config.directory {
        Some(dir) => builder.directory(dir).json(config.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

fn raise(level: LevelFilter, steps: u8) -> LevelFilter {
    const LADDER: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = LADDER.iter().position(|l| *l == level).unwrap_or(2);
    LADDER[(start + usize::from(steps)).min(LADDER.len() - 1)]
}
