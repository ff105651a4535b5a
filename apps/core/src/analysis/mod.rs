//! # Analysis Module
//!
//! Keyword/pattern text analysis for Ask Krivya. No model inference: every
//! judgement comes from fixed word lists, regular expressions and a curated
//! answer table.
//!
//! ## Components
//! - `signals`: word lists, compiled patterns and signal detection
//! - `triage`: fact-vs-emotion decision
//! - `emotion`: entities, sentiment and confidence for emotional text
//! - `fact`: claims, verdict and confidence for factual text
//! - `answers`: static answer table consulted first
//! - `record`: output data structures
//! - `classifier`: main orchestrator
//! - `samples`: demo texts
//! - `screening`: news credibility screener

pub mod answers;
pub mod classifier;
pub mod emotion;
pub mod fact;
pub mod record;
pub mod samples;
pub mod screening;
pub mod signals;
pub mod triage;

pub use classifier::{classify, classify_with_rng, TextClassifier};
pub use record::{
    AnalysisReport, Category, Claim, ClaimKind, ClassificationRecord, ConfidenceBand, RecordOrigin,
    Sentiment, SourceCitation, Verdict,
};
pub use screening::{NewsScreener, ScreeningReport, ScreeningStatus};
pub use signals::TextSignals;
pub use triage::{Triage, TriageScores};
