//! Triage - decides whether a text reads as fact or as emotion.
//!
//! Two integer scores are built from surface signals; the larger wins and
//! ties fall back to a length/punctuation rule.

use serde::{Deserialize, Serialize};

use super::record::Category;
use super::signals::TextSignals;

/// Texts longer than this (in UTF-16 units) lean factual on a tie
pub const DEFAULT_TIE_BREAK_LENGTH: usize = 100;

/// Scores computed during triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageScores {
    pub emotional: u32,
    pub factual: u32,
}

impl TriageScores {
    pub fn from_signals(signals: &TextSignals) -> Self {
        let emotional = signals.emotional_words as u32
            + if signals.has_exclamation { 2 } else { 0 }
            + if signals.has_triage_intensifier { 1 } else { 0 }
            + if signals.has_personal_pronoun { 1 } else { 0 }
            + if signals.has_subjective_language { 2 } else { 0 };

        let factual = signals.factual_words as u32
            + if signals.has_numbers { 2 } else { 0 }
            + if signals.has_percent_sign { 1 } else { 0 }
            + if signals.has_date { 1 } else { 0 }
            + if signals.has_unit { 1 } else { 0 }
            + if signals.has_citation_hint { 3 } else { 0 };

        Self { emotional, factual }
    }
}

/// Fact-vs-emotion decision
#[derive(Debug, Clone, Copy)]
pub struct Triage {
    tie_break_length: usize,
}

impl Default for Triage {
    fn default() -> Self {
        Self::new(DEFAULT_TIE_BREAK_LENGTH)
    }
}

impl Triage {
    pub fn new(tie_break_length: usize) -> Self {
        Self { tie_break_length }
    }

    pub fn decide(&self, signals: &TextSignals) -> (Category, TriageScores) {
        let scores = TriageScores::from_signals(signals);

        let category = if scores.factual > scores.emotional {
            Category::Fact
        } else if scores.emotional > scores.factual {
            Category::Emotion
        } else if signals.length > self.tie_break_length && !signals.has_exclamation {
            Category::Fact
        } else {
            Category::Emotion
        };

        (category, scores)
    }

    /// Convenience wrapper that detects signals first
    pub fn classify(&self, text: &str) -> Category {
        self.decide(&TextSignals::detect(text)).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factual_text() {
        let triage = Triage::default();
        let (category, scores) = triage.decide(&TextSignals::detect(
            "The stock market closed at 4,500 points today, representing a 2.3% increase",
        ));
        assert_eq!(category, Category::Fact);
        assert_eq!(scores.emotional, 0);
        assert_eq!(scores.factual, 3);
    }

    #[test]
    fn test_emotional_text() {
        let triage = Triage::default();
        let (category, scores) = triage.decide(&TextSignals::detect(
            "I absolutely love this new restaurant! The food is amazing",
        ));
        assert_eq!(category, Category::Emotion);
        // love + amazing + "!" + intensifier + pronoun
        assert_eq!(scores.emotional, 6);
    }

    #[test]
    fn test_short_tie_goes_to_emotion() {
        let triage = Triage::default();
        assert_eq!(triage.classify("ok"), Category::Emotion);
        assert_eq!(triage.classify(""), Category::Emotion);
        assert_eq!(triage.classify("   "), Category::Emotion);
    }

    #[test]
    fn test_long_tie_goes_to_fact_without_exclamation() {
        let triage = Triage::default();
        let long_plain = "The committee met on the second floor and the members went through each item on the agenda one after another";
        assert!(long_plain.chars().count() > DEFAULT_TIE_BREAK_LENGTH);
        assert_eq!(triage.classify(long_plain), Category::Fact);

        // The exclamation mark also adds emotional weight, so the tie is broken before the rule
        let long_loud = format!("{}!", long_plain);
        assert_eq!(triage.classify(&long_loud), Category::Emotion);
    }

    #[test]
    fn test_tie_break_is_strictly_longer() {
        let triage = Triage::default();
        let at_limit: String = "the cat sat on the mat ".chars().cycle().take(100).collect();
        let (category, scores) = triage.decide(&TextSignals::detect(&at_limit));
        assert_eq!(scores, TriageScores { emotional: 0, factual: 0 });
        assert_eq!(category, Category::Emotion);

        let past_limit = format!("{}x", at_limit);
        assert_eq!(triage.classify(&past_limit), Category::Fact);
    }

    #[test]
    fn test_tie_break_counts_utf16_units() {
        // 98 ASCII bytes plus one astral character: 99 chars but 100 units
        let text = format!("{}\u{1F600}", "the cat sat on the mat ".chars().cycle().take(98).collect::<String>());
        assert_eq!(Triage::default().classify(&text), Category::Emotion);
        assert_eq!(Triage::new(99).classify(&text), Category::Fact);
    }

    #[test]
    fn test_tie_break_length_is_configurable() {
        let text = "The committee met on the second floor";
        assert_eq!(Triage::default().classify(text), Category::Emotion);
        assert_eq!(Triage::new(10).classify(text), Category::Fact);
    }
}
