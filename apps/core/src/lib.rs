//! Ask Krivya analysis core.
//!
//! Classifies free text as fact-leaning or emotion-leaning and attaches a
//! verdict or sentiment with a heuristic confidence. See [`analysis`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;

pub use analysis::{classify, classify_with_rng, ClassificationRecord, TextClassifier};
pub use config::Settings;
pub use error::{AppError, AppResult};
