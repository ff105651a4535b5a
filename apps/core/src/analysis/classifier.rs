//! Text Classifier - main orchestrator of the analysis module.
//!
//! 1. Static answer table (exact curated records)
//! 2. Triage into fact or emotion
//! 3. Branch analysis (claims + verdict, or entities + sentiment)
//!
//! The only randomness is the fact verdict draw, taken from the `Rng`
//! passed to [`TextClassifier::classify_with_rng`].

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::answers;
use super::emotion::EmotionAnalyzer;
use super::fact::FactAnalyzer;
use super::record::{AnalysisReport, Category, ClassificationRecord};
use super::signals::TextSignals;
use super::triage::{Triage, DEFAULT_TIE_BREAK_LENGTH};
use crate::config::Settings;

/// Classifier over free text. Holds no mutable state; share it freely.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    triage: Triage,
    emotion: EmotionAnalyzer,
    fact: FactAnalyzer,
    seed: Option<u64>,
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClassifier {
    /// Classifier with the default tie-break and OS-seeded randomness
    pub fn new() -> Self {
        Self::with_config(DEFAULT_TIE_BREAK_LENGTH, None)
    }

    pub fn with_config(tie_break_length: usize, seed: Option<u64>) -> Self {
        Self {
            triage: Triage::new(tie_break_length),
            emotion: EmotionAnalyzer::new(),
            fact: FactAnalyzer::new(),
            seed,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_config(settings.tie_break_length, settings.seed)
    }

    /// Classify `text`. With a configured seed every call draws from a fresh
    /// generator seeded with it, so identical input gives identical output.
    pub fn classify(&self, text: &str) -> ClassificationRecord {
        match self.seed {
            Some(seed) => self.classify_with_rng(text, &mut StdRng::seed_from_u64(seed)),
            None => self.classify_with_rng(text, &mut rand::thread_rng()),
        }
    }

    /// Classify `text`, drawing the fact verdict from `rng`
    pub fn classify_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ClassificationRecord {
        if let Some(entry) = answers::lookup(text) {
            debug!(question = entry.question, "Static answer matched");
            return entry.to_record();
        }

        let signals = TextSignals::detect(text);
        let (category, scores) = self.triage.decide(&signals);
        debug!(
            emotional = scores.emotional,
            factual = scores.factual,
            %category,
            "Triage complete"
        );

        match category {
            Category::Emotion => self.emotion.analyze(text, &signals),
            Category::Fact => self.fact.analyze(text, &signals, rng),
        }
    }

    /// Classify and wrap the record with an id, timestamp and timing
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();
        let record = self.classify(text);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!("Analysis complete: {}", record.summary_line());

        AnalysisReport {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            processing_time_ms,
            record,
        }
    }
}

/// Classify with a default classifier
pub fn classify(text: &str) -> ClassificationRecord {
    TextClassifier::new().classify(text)
}

/// Classify with a default classifier and an explicit random source
pub fn classify_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> ClassificationRecord {
    TextClassifier::new().classify_with_rng(text, rng)
}
