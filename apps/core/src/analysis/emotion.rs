//! Emotion branch: emotional entities, sentiment polarity and confidence.

use std::collections::HashSet;

use super::record::{ClassificationRecord, Sentiment, MAX_CONFIDENCE};
use super::signals::{self, TextSignals, EMOTION_CLUSTERS, NEGATIVE_WORDS, POSITIVE_WORDS};

const BASE_CONFIDENCE: u32 = 70;

/// Analyzer for emotion-leaning text
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionAnalyzer;

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased cluster matches, deduplicated in first-seen order
    pub fn extract_entities(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut entities = Vec::new();

        for pattern in EMOTION_CLUSTERS.iter() {
            for m in pattern.find_iter(text) {
                let entity = m.as_str().to_lowercase();
                if seen.insert(entity.clone()) {
                    entities.push(entity);
                }
            }
        }

        entities
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let positive = signals::count_present(&lowered, POSITIVE_WORDS);
        let negative = signals::count_present(&lowered, NEGATIVE_WORDS);

        if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn confidence(&self, signals: &TextSignals, entity_count: usize) -> u8 {
        let entities = u32::try_from(entity_count).unwrap_or(u32::MAX);
        let bonus = if signals.has_exclamation { 5 } else { 0 }
            + if signals.has_personal_feeling { 8 } else { 0 }
            + if signals.has_emotion_intensifier { 4 } else { 0 };
        let confidence = BASE_CONFIDENCE
            .saturating_add(entities.saturating_mul(3))
            .saturating_add(bonus);

        confidence.min(MAX_CONFIDENCE as u32) as u8
    }

    pub fn analyze(&self, text: &str, signals: &TextSignals) -> ClassificationRecord {
        let entities = self.extract_entities(text);
        let sentiment = self.sentiment(text);
        let confidence = self.confidence(signals, entities.len());

        ClassificationRecord::heuristic_emotion(sentiment, confidence, entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_deduplicated_and_lowercased() {
        let analyzer = EmotionAnalyzer::new();
        let entities = analyzer.extract_entities("LOVE it, love it, Amazing and amazing, so sad");
        assert_eq!(entities, vec!["love", "amazing", "sad"]);
    }

    #[test]
    fn test_entities_follow_cluster_order() {
        let analyzer = EmotionAnalyzer::new();
        // "sad" appears first in the text but its cluster is scanned last
        let entities = analyzer.extract_entities("sad and furious, yet I adore it");
        assert_eq!(entities, vec!["adore", "furious", "sad"]);
    }

    #[test]
    fn test_entities_respect_word_boundaries() {
        let analyzer = EmotionAnalyzer::new();
        assert!(analyzer.extract_entities("lovely saddle").is_empty());
    }

    #[test]
    fn test_entities_after_non_ascii_letters() {
        let analyzer = EmotionAnalyzer::new();
        assert_eq!(analyzer.extract_entities("élove"), vec!["love"]);
        assert_eq!(analyzer.extract_entities("naïve but happy"), vec!["happy"]);
    }

    #[test]
    fn test_confidence_saturates_on_huge_counts() {
        let analyzer = EmotionAnalyzer::new();
        let signals = TextSignals::detect("I feel very strongly!");
        assert_eq!(analyzer.confidence(&signals, usize::MAX), MAX_CONFIDENCE);
    }

    #[test]
    fn test_sentiment() {
        let analyzer = EmotionAnalyzer::new();
        assert_eq!(analyzer.sentiment("What a wonderful, happy day"), Sentiment::Positive);
        assert_eq!(analyzer.sentiment("Awful service, I hate it"), Sentiment::Negative);
        assert_eq!(analyzer.sentiment("I love it but I hate the price"), Sentiment::Neutral);
        assert_eq!(analyzer.sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_confidence_components() {
        let analyzer = EmotionAnalyzer::new();

        let plain = TextSignals::detect("nothing here");
        assert_eq!(analyzer.confidence(&plain, 0), 70);

        let loud = TextSignals::detect("I feel very strongly!");
        // 70 + 2*3 + 5 + 8 + 4
        assert_eq!(analyzer.confidence(&loud, 2), 93);
    }

    #[test]
    fn test_confidence_capped() {
        let analyzer = EmotionAnalyzer::new();
        let loud = TextSignals::detect("I feel very strongly!");
        assert_eq!(analyzer.confidence(&loud, 20), 99);
    }

    #[test]
    fn test_analyze_builds_emotion_record() {
        let analyzer = EmotionAnalyzer::new();
        let text = "I absolutely love this new restaurant! The food is amazing";
        let record = analyzer.analyze(text, &TextSignals::detect(text));

        assert_eq!(record.sentiment, Some(Sentiment::Positive));
        assert_eq!(record.matched_entities, vec!["love", "amazing"]);
        assert_eq!(record.confidence, 93);
        assert!(record.claims.is_empty());
    }
}
