//! Application initialization and configuration

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use crate::{cli, config, logging};
use crate::queue::QueueConfig;

pub fn load_configuration(args: &cli::Args) -> Result<config::ConfigManager> {
    let mut manager = match &args.config_file {
        Some(config_file) => {
            debug!("Loading configuration from explicit file: {}", config_file.display());
            config::ConfigManager::load_from_file(config_file.clone())?
        }
        None => config::ConfigManager::load()?,
    };

    if let Some(path) = manager.config_file_path() {
        debug!("Using configuration file: {}", path.display());
    }

    if let Some(section_name) = &args.config_name {
        manager.select_section(section_name.clone());
    }

    Ok(manager)
}

/// Build the logger configuration. CLI flags win over the config file.
pub fn configure_logging(args: &cli::Args, config: &config::ConfigManager) -> Result<logging::LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        config
            .get_log_level("base", "console-level")
            .context("Invalid console-level in config")?
            .unwrap_or(LevelFilter::Warn)
    };

    let format = match args.log_format.as_deref().or_else(|| config.get_value("base", "log-format").map(String::as_str)) {
        Some(format) => format
            .parse::<logging::LogFormat>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => logging::LogFormat::Text,
    };

    let log_file = args.log_file.clone().or_else(|| config.get_path("base", "log-file"));

    let file_level = match &args.log_file_level {
        Some(level) => Some(logging::parse_log_level(level)?),
        None => config
            .get_log_level("base", "file-log-level")
            .context("Invalid file-log-level in config")?,
    };

    let log_console = config
        .get_bool("base", "log-console")
        .context("Invalid log-console in config")?
        .unwrap_or(true);

    let (destination, file_level) = match log_file {
        // file level defaults to the console level
        Some(path) if log_console => (
            logging::LogDestination::Both(path),
            Some(file_level.unwrap_or(console_level)),
        ),
        Some(path) => (
            logging::LogDestination::File(path),
            Some(file_level.unwrap_or(console_level)),
        ),
        None if file_level.is_some() => {
            return Err(anyhow::anyhow!("Log file level specified without log file"));
        }
        None => (logging::LogDestination::Console, None),
    };

    Ok(logging::LogConfig {
        console_level,
        file_level,
        format,
        destination,
    })
}

/// Merge queue options: CLI flags override `[queue]` config values
pub fn resolve_queue_config(args: &cli::Args, config: &config::ConfigManager) -> Result<QueueConfig> {
    let mut queue_config = config.get_queue_config()?;

    if let Some(kind) = args.kind {
        queue_config.kind = kind;
    }
    if let Some(order) = args.order {
        queue_config.order = order;
    }
    if let Some(layout) = args.layout {
        queue_config.layout = layout;
    }

    debug!("Resolved queue configuration: {:?}", queue_config);
    Ok(queue_config)
}
