//! Settings read from the environment (and an optional `.env` file).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::analysis::triage::DEFAULT_TIE_BREAK_LENGTH;
use crate::error::{AppError, AppResult};

pub const ENV_SEED: &str = "KRIVYA_SEED";
pub const ENV_TIE_BREAK_LENGTH: &str = "KRIVYA_TIE_BREAK_LENGTH";
pub const ENV_LOG: &str = "KRIVYA_LOG";
pub const ENV_LOG_FORMAT: &str = "KRIVYA_LOG_FORMAT";

/// Output format of log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{}: unknown log format '{}' (expected 'pretty' or 'json')",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Runtime settings for the classifier and its binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Seed for the fact verdict draw; `None` uses OS randomness.
    pub seed: Option<u64>,
    /// Character length above which a tied, exclamation-free text is treated as factual.
    #[validate(range(min = 1, max = 10000))]
    pub tie_break_length: usize,
    /// `tracing` filter directive, e.g. `info` or `krivya_core=debug`.
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tie_break_length: DEFAULT_TIE_BREAK_LENGTH,
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn load() -> AppResult<Self> {
        // A missing .env file is the normal case.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read settings from the process environment only.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let settings = Self {
            seed: parse_var(ENV_SEED)?,
            tie_break_length: parse_var(ENV_TIE_BREAK_LENGTH)?.unwrap_or(defaults.tie_break_length),
            log_filter: env::var(ENV_LOG).unwrap_or(defaults.log_filter),
            log_format: parse_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
        };

        settings.validate()?;
        Ok(settings)
    }
}

fn parse_var<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: invalid value '{}': {}", name, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}
