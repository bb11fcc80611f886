pub mod config;
pub mod error;

pub use config::{Config, EndpointsConfig, LookupConfig, ValidationResult};
pub use error::{
    AppError, ConfigError, InputError, NetworkError, ReqwestErrorExt, WeatherError,
    GENERIC_FAILURE_MESSAGE,
};

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where log output is written.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Plain stderr; used when no terminal UI owns the screen.
    Stderr,
    /// Append to a file; used while the terminal UI is drawing.
    File(PathBuf),
}

/// Initialize tracing/logging.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        }
    }

    tracing::info!("Weather Now core initialized");
    Ok(())
}
