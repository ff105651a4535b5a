//! Text Signals - word lists and compiled patterns shared by the classifier.
//!
//! Word lists are matched as case-insensitive substrings. Patterns are
//! compiled once at first use and shared read-only between threads.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Words that push text towards the emotion category
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love",
    "hate",
    "amazing",
    "terrible",
    "incredible",
    "awful",
    "fantastic",
    "horrible",
    "best",
    "worst",
    "beautiful",
    "ugly",
    "perfect",
    "disgusting",
    "wonderful",
    "pathetic",
    "brilliant",
    "stupid",
    "excited",
    "disappointed",
    "thrilled",
    "devastated",
    "happy",
    "sad",
    "angry",
    "frustrated",
    "delighted",
    "annoyed",
    "impressed",
    "shocked",
];

/// Words that push text towards the fact category
pub const FACTUAL_WORDS: &[&str] = &[
    "data",
    "research",
    "study",
    "report",
    "statistics",
    "evidence",
    "according",
    "analysis",
    "findings",
    "results",
    "survey",
    "investigation",
    "experiment",
    "measurement",
    "observation",
    "documentation",
    "record",
    "database",
    "census",
    "poll",
    "metric",
    "percentage",
    "ratio",
];

/// Words counted towards positive sentiment
pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "amazing",
    "incredible",
    "fantastic",
    "wonderful",
    "brilliant",
    "excellent",
    "perfect",
    "beautiful",
    "happy",
    "excited",
    "thrilled",
    "delighted",
];

/// Words counted towards negative sentiment
pub const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "horrible",
    "disgusting",
    "pathetic",
    "worst",
    "ugly",
    "sad",
    "angry",
    "disappointed",
    "devastated",
    "frustrated",
];

// Compile patterns once at startup.
// NOTE: expect() only guards literal patterns below; a failure is a build-time typo.
// Digits and word boundaries are ASCII-only: "١٢٣" is not a number and
// "2023年" still ends a year.

pub(crate) static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("Invalid regex: digit run"));

pub(crate) static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?%?").expect("Invalid regex: number token"));

pub(crate) static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?%").expect("Invalid regex: percentage"));

// Month abbreviations are matched case-sensitively so that "market" or "may"
// inside ordinary prose do not count as dates.
pub(crate) static DATE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u:\b)(19|20)[0-9]{2}(?-u:\b)|(?-u:\b)(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*(?-u:\b)|(?-u:\b)[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}(?-u:\b)",
    )
    .expect("Invalid regex: date hint")
});

pub(crate) static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u:\b)(19|20)[0-9]{2}(?-u:\b)|(?-u:\b)(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+[0-9]{1,2},?\s+[0-9]{4}(?-u:\b)",
    )
    .expect("Invalid regex: date token")
});

pub(crate) static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)[0-9]+\s*(kg|lb|meter|mile|celsius|fahrenheit|dollar|euro|percent)(?-u:\b)")
        .expect("Invalid regex: unit of measure")
});

/// Citation phrases that count in triage
pub(crate) static CITATION_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)according to|research shows|study found|data indicates")
        .expect("Invalid regex: citation hint")
});

/// Citation phrases that count as evidence in the fact branch
pub(crate) static CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)according to|research shows|study found").expect("Invalid regex: citation")
});

pub(crate) static CITATION_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)according to [^.]+|research shows [^.]+|study found [^.]+")
        .expect("Invalid regex: citation claim")
});

pub(crate) static TRIAGE_INTENSIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(very|extremely|incredibly|absolutely|totally|completely|utterly)(?-u:\b)")
        .expect("Invalid regex: triage intensifiers")
});

pub(crate) static PERSONAL_PRONOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(I|me|my|mine|we|us|our|you|your)(?-u:\b)")
        .expect("Invalid regex: personal pronouns")
});

pub(crate) static SUBJECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(think|feel|believe|opinion|personally|seems|appears)(?-u:\b)")
        .expect("Invalid regex: subjective language")
});

pub(crate) static PERSONAL_FEELING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(I|me|my|feel|think|believe)(?-u:\b)").expect("Invalid regex: personal feeling")
});

pub(crate) static EMOTION_INTENSIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(very|extremely|incredibly|absolutely)(?-u:\b)")
        .expect("Invalid regex: emotion intensifiers")
});

/// Synonym clusters scanned for emotional entities, in reporting order
pub(crate) static EMOTION_CLUSTERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(?-u:\b)(love|adore|cherish|treasure)(?-u:\b)").expect("Invalid regex: love cluster"),
        Regex::new(r"(?i)(?-u:\b)(hate|despise|loathe|detest)(?-u:\b)").expect("Invalid regex: hate cluster"),
        Regex::new(r"(?i)(?-u:\b)(amazing|incredible|fantastic|wonderful|brilliant)(?-u:\b)")
            .expect("Invalid regex: amazing cluster"),
        Regex::new(r"(?i)(?-u:\b)(terrible|awful|horrible|disgusting|pathetic)(?-u:\b)")
            .expect("Invalid regex: terrible cluster"),
        Regex::new(r"(?i)(?-u:\b)(excited|thrilled|delighted|overjoyed)(?-u:\b)")
            .expect("Invalid regex: excited cluster"),
        Regex::new(r"(?i)(?-u:\b)(disappointed|devastated|heartbroken|crushed)(?-u:\b)")
            .expect("Invalid regex: disappointed cluster"),
        Regex::new(r"(?i)(?-u:\b)(angry|furious|outraged|livid)(?-u:\b)").expect("Invalid regex: angry cluster"),
        Regex::new(r"(?i)(?-u:\b)(happy|joyful|cheerful|content)(?-u:\b)").expect("Invalid regex: happy cluster"),
        Regex::new(r"(?i)(?-u:\b)(sad|depressed|melancholy|sorrowful)(?-u:\b)").expect("Invalid regex: sad cluster"),
    ]
});

/// Number of words from `words` that occur anywhere in `lowered`
pub fn count_present(lowered: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| lowered.contains(*w)).count()
}

/// Every surface signal the classifier looks at, detected in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSignals {
    /// Length in UTF-16 code units, so an emoji counts twice
    pub length: usize,
    pub emotional_words: usize,
    pub factual_words: usize,
    pub has_exclamation: bool,
    pub has_numbers: bool,
    pub has_percent_sign: bool,
    pub has_percentage: bool,
    pub has_date: bool,
    pub has_unit: bool,
    /// Any of the four triage citation phrases
    pub has_citation_hint: bool,
    /// Citation phrases that count as evidence in the fact branch
    pub has_citation: bool,
    pub has_triage_intensifier: bool,
    pub has_personal_pronoun: bool,
    pub has_subjective_language: bool,
    pub has_personal_feeling: bool,
    pub has_emotion_intensifier: bool,
}

impl TextSignals {
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();

        Self {
            length: text.encode_utf16().count(),
            emotional_words: count_present(&lowered, EMOTIONAL_WORDS),
            factual_words: count_present(&lowered, FACTUAL_WORDS),
            has_exclamation: text.contains('!'),
            has_numbers: DIGITS.is_match(text),
            has_percent_sign: text.contains('%'),
            has_percentage: PERCENTAGE.is_match(text),
            has_date: DATE_HINT.is_match(text),
            has_unit: UNIT.is_match(text),
            has_citation_hint: CITATION_HINT.is_match(text),
            has_citation: CITATION.is_match(text),
            has_triage_intensifier: TRIAGE_INTENSIFIER.is_match(text),
            has_personal_pronoun: PERSONAL_PRONOUN.is_match(text),
            has_subjective_language: SUBJECTIVE.is_match(text),
            has_personal_feeling: PERSONAL_FEELING.is_match(text),
            has_emotion_intensifier: EMOTION_INTENSIFIER.is_match(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_signals() {
        let signals = TextSignals::detect("");
        assert_eq!(signals, TextSignals::default());
    }

    #[test]
    fn test_numeric_signals() {
        let signals = TextSignals::detect("Inflation hit 3.2% in March 2023, about 12 percent overall");
        assert!(signals.has_numbers);
        assert!(signals.has_percent_sign);
        assert!(signals.has_percentage);
        assert!(signals.has_date);
        assert!(signals.has_unit);
    }

    #[test]
    fn test_month_hint_is_case_sensitive() {
        assert!(!TextSignals::detect("the market may rally").has_date);
        assert!(TextSignals::detect("It launched in May").has_date);
        assert!(TextSignals::detect("due 12/31/24").has_date);
    }

    #[test]
    fn test_citation_phrases() {
        let signals = TextSignals::detect("Data indicates a shift");
        assert!(signals.has_citation_hint);
        assert!(!signals.has_citation);

        let signals = TextSignals::detect("According to the WHO, cases fell");
        assert!(signals.has_citation_hint);
        assert!(signals.has_citation);
    }

    #[test]
    fn test_pronouns_need_word_boundaries() {
        assert!(!TextSignals::detect("music bus").has_personal_pronoun);
        assert!(TextSignals::detect("tell us more").has_personal_pronoun);
        assert!(TextSignals::detect("I agree").has_personal_pronoun);
    }

    #[test]
    fn test_word_counts_are_substring_based() {
        // "saddle" contains "sad", "databases" contains "data" and "database"
        let signals = TextSignals::detect("A saddle and two databases");
        assert_eq!(signals.emotional_words, 1);
        assert_eq!(signals.factual_words, 2);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(TextSignals::detect("6000°C").length, 6);
        assert_eq!(TextSignals::detect("ok 😀").length, 5);
    }

    #[test]
    fn test_digits_and_boundaries_are_ascii() {
        let signals = TextSignals::detect("١٢٣");
        assert!(!signals.has_numbers);
        assert!(!signals.has_percentage);

        assert!(!TextSignals::detect("٢٠٢٣ ٤٥").has_numbers);
        assert!(TextSignals::detect("2023年").has_date);
        assert!(TextSignals::detect("5kg的货物").has_unit);
        assert!(TextSignals::detect("très very").has_triage_intensifier);
    }

    #[test]
    fn test_cluster_matches_after_non_ascii_letter() {
        let love = &EMOTION_CLUSTERS[0];
        let found: Vec<&str> = love.find_iter("élove").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["love"]);
    }
}
