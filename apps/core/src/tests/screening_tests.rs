//! News Screener Tests

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::screening::{CredibilityClass, NewsScreener, ScreeningStatus};
use crate::error::AppError;

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        let screener = NewsScreener::new();
        let mut rng = StdRng::seed_from_u64(0);

        for text in ["", "   ", "\n\t"] {
            let err = screener.screen(text, &mut rng).expect_err("blank text should fail");
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_emotional_message_routed() {
        let screener = NewsScreener::new();
        let report = screener
            .screen("I feel so lonely since the move", &mut StdRng::seed_from_u64(0))
            .expect("screening should succeed");

        assert_eq!(report.status, ScreeningStatus::Emotional);
        assert_eq!(report.confidence, 95.0);
        assert!(report.analysis.is_none());
        assert!(report.explanation.contains("your feelings are valid"));
    }

    #[test]
    fn test_personal_message_routed() {
        let screener = NewsScreener::new();
        let report = screener
            .screen("What should I tell my friend about the job offer", &mut StdRng::seed_from_u64(0))
            .expect("screening should succeed");

        assert_eq!(report.status, ScreeningStatus::Personal);
        assert!(report.analysis.is_none());
    }

    #[test]
    fn test_emotional_wins_over_personal() {
        let screener = NewsScreener::new();
        let report = screener
            .screen("My family is worried about the storm", &mut StdRng::seed_from_u64(0))
            .expect("screening should succeed");

        assert_eq!(report.status, ScreeningStatus::Emotional);
    }
}

#[cfg(test)]
mod scoring_tests {
    use super::*;

    fn assert_sums_to_one(text: &str, seed: u64) {
        let report = NewsScreener::new()
            .screen(text, &mut StdRng::seed_from_u64(seed))
            .expect("screening should succeed");
        let scores = report.analysis.expect("news gets scored").scores;
        let total = scores.true_score + scores.false_score + scores.not_sure;
        assert!((total - 1.0).abs() < 1e-9, "scores sum to {} for '{}'", total, text);
    }

    #[test]
    fn test_scores_sum_to_one() {
        for seed in 0..50 {
            assert_sums_to_one("The central bank raised rates by a quarter point", seed);
            assert_sums_to_one("Viral post about a 5G hoax spreads online", seed);
            assert_sums_to_one("The senator allegedly met the lobbyists twice", seed);
        }
    }

    #[test]
    fn test_misinformation_keywords_lead_to_misinformation() {
        let screener = NewsScreener::new();
        for seed in 0..50 {
            let report = screener
                .screen("Debunked conspiracy about moon rocks resurfaces", &mut StdRng::seed_from_u64(seed))
                .expect("screening should succeed");
            assert_eq!(report.status, ScreeningStatus::Misinformation);
            assert!(report.confidence >= 65.0);
        }
    }

    #[test]
    fn test_plain_news_is_reliable() {
        let screener = NewsScreener::new();
        for seed in 0..50 {
            let report = screener
                .screen("The central bank raised rates by a quarter point", &mut StdRng::seed_from_u64(seed))
                .expect("screening should succeed");
            assert_eq!(report.status, ScreeningStatus::Reliable);
            let analysis = report.analysis.expect("news gets scored");
            assert_eq!(analysis.classification, CredibilityClass::True);
            assert_eq!(analysis.sources.len(), 3);
        }
    }

    #[test]
    fn test_hedged_news_at_lowest_draw() {
        // Draws of 0.0: not-sure 0.45, true 0.25, false 0.30
        let report = NewsScreener::new()
            .screen("Sources say the factory will close", &mut StepRng::new(0, 0))
            .expect("screening should succeed");

        assert_eq!(report.status, ScreeningStatus::Uncertain);
        let analysis = report.analysis.expect("news gets scored");
        assert_eq!(analysis.classification, CredibilityClass::NotSure);
        assert!((report.confidence - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_topic_sources_attached() {
        let report = NewsScreener::new()
            .screen("New climate report shows record heat", &mut StdRng::seed_from_u64(5))
            .expect("screening should succeed");
        let sources = report.analysis.expect("news gets scored").sources;

        assert_eq!(sources.len(), 2);
        assert!(sources[0].url.contains("nasa.gov"));
    }
}
