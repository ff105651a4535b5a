//! Logging setup.
//!
//! Installs the global `tracing` subscriber once, at binary start-up. Events
//! go to stderr so stdout stays reserved for report JSON.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{LogFormat, Settings};
use crate::error::{AppError, AppResult};

/// Application name attached to bunyan records
const APP_NAME: &str = "krivya";

/// Build the filter from the configured directive
pub fn build_filter(directive: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| AppError::Config(format!("invalid log filter '{}': {}", directive, e)))
}

/// Install the global subscriber described by `settings`.
pub fn init(settings: &Settings) -> AppResult<()> {
    let filter = build_filter(&settings.log_filter)?;

    match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| AppError::Config(format!("failed to install logger: {}", e))),
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| AppError::Config(format!("failed to install logger: {}", e)))
        }
    }
}
