//! Static Answer Table - curated question/answer records.
//!
//! Consulted before the heuristic. A text matches an entry when, after
//! trimming and lowercasing, either one contains the other. Factual entries
//! are checked before emotional ones and the first match wins.

use super::record::{
    Category, Claim, ClaimKind, ClassificationRecord, ConfidenceBand, RecordOrigin, Sentiment,
    SourceCitation, Verdict,
};

/// Pre-authored judgement of a static entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticAnswer {
    Fact(Verdict),
    Emotion(Sentiment),
}

impl StaticAnswer {
    pub fn category(&self) -> Category {
        match self {
            StaticAnswer::Fact(_) => Category::Fact,
            StaticAnswer::Emotion(_) => Category::Emotion,
        }
    }
}

/// One curated record
#[derive(Debug, Clone, Copy)]
pub struct StaticAnswerEntry {
    pub question: &'static str,
    pub answer: StaticAnswer,
    pub confidence: u8,
    pub explanation: &'static str,
    /// "Publisher - URL" for facts, a free-form note for emotions
    pub source: &'static str,
    /// (kind, statement) pairs, facts only
    pub claims: &'static [(&'static str, &'static str)],
    /// Emotional entities, emotions only
    pub entities: &'static [&'static str],
}

impl StaticAnswerEntry {
    /// Whether `normalized` (trimmed, lowercased, non-empty) matches this entry
    fn matches(&self, normalized: &str) -> bool {
        let question = self.question.to_lowercase();
        normalized.contains(&question) || question.contains(normalized)
    }

    pub fn to_record(&self) -> ClassificationRecord {
        let category = self.answer.category();
        let claims: Vec<Claim> = self
            .claims
            .iter()
            .map(|(kind, text)| Claim::new(ClaimKind::Curated((*kind).to_string()), *text))
            .collect();
        let matched_entities: Vec<String> = self.entities.iter().map(|e| e.to_string()).collect();

        let (verdict, sentiment, summary, details) = match self.answer {
            StaticAnswer::Fact(verdict) => {
                let summary = format!(
                    "{} This claim is {}.",
                    self.explanation,
                    verdict.to_string().to_uppercase()
                );
                let details = format!(
                    "RoBERTa fact-checker analyzed this claim against verified sources. {} factual \
                     claims were identified and cross-referenced with reliable databases. Source \
                     verification completed with {}% confidence.",
                    claims.len(),
                    self.confidence
                );
                (Some(verdict), None, summary, details)
            }
            StaticAnswer::Emotion(sentiment) => {
                let summary = format!("{} Overall sentiment: {}.", self.explanation, sentiment);
                let details = format!(
                    "NER sentiment analyzer identified {} emotional entities and classified the \
                     overall sentiment as {}. Emotional intensity analysis shows {} confidence in \
                     this classification.",
                    matched_entities.len(),
                    sentiment,
                    ConfidenceBand::from_confidence(self.confidence)
                );
                (None, Some(sentiment), summary, details)
            }
        };

        ClassificationRecord {
            category,
            confidence: self.confidence,
            verdict,
            sentiment,
            matched_entities,
            claims,
            source: Some(SourceCitation::parse(self.source)),
            origin: RecordOrigin::StaticTable,
            label: category.label().to_string(),
            model: category.model_name().to_string(),
            summary,
            details,
        }
    }
}

/// Factual entries, checked first
pub static FACTUAL_ANSWERS: &[StaticAnswerEntry] = &[
    StaticAnswerEntry {
        question: "The Great Wall of China is visible from space with the naked eye",
        answer: StaticAnswer::Fact(Verdict::False),
        confidence: 92,
        explanation: "This is a common myth. The Great Wall is not visible from space with the naked eye, as confirmed by multiple astronauts and space agencies.",
        source: "NASA - https://www.nasa.gov/audience/forstudents/k-4/stories/nasa-knows/what-is-the-great-wall-of-china-k4.html",
        claims: &[
            ("Visibility", "Great Wall from space"),
            ("Architectural", "Wall dimensions"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "Water boils at 100 degrees Celsius at sea level",
        answer: StaticAnswer::Fact(Verdict::True),
        confidence: 98,
        explanation: "At standard atmospheric pressure (1 atmosphere or 101.325 kPa), pure water boils at exactly 100°C (212°F).",
        source: "Encyclopedia Britannica - https://www.britannica.com/science/boiling-point",
        claims: &[
            ("Temperature", "100°C"),
            ("Pressure", "sea level conditions"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "Humans only use 10% of their brain",
        answer: StaticAnswer::Fact(Verdict::False),
        confidence: 95,
        explanation: "Neuroimaging shows that humans use virtually every part of the brain, and most of the brain is active almost all the time.",
        source: "Scientific American - https://www.scientificamerican.com/article/do-people-only-use-10-percent-of-their-brains/",
        claims: &[
            ("Percentage", "10%"),
            ("Neurological", "brain usage"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "The Earth's core temperature is approximately 6000°C",
        answer: StaticAnswer::Fact(Verdict::True),
        confidence: 87,
        explanation: "The Earth's inner core temperature is estimated to be around 5700-6000°C, similar to the surface temperature of the Sun.",
        source: "Nature Geoscience - https://www.nature.com/articles/ngeo1219",
        claims: &[
            ("Temperature", "6000°C"),
            ("Geological", "Earth's core"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "Lightning never strikes the same place twice",
        answer: StaticAnswer::Fact(Verdict::False),
        confidence: 94,
        explanation: "Lightning frequently strikes the same location multiple times, especially tall structures like skyscrapers and towers.",
        source: "National Weather Service - https://www.weather.gov/safety/lightning-myths",
        claims: &[
            ("Frequency", "lightning strikes"),
            ("Location", "same place"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "Antibiotics are effective against viral infections",
        answer: StaticAnswer::Fact(Verdict::False),
        confidence: 96,
        explanation: "Antibiotics only work against bacterial infections, not viral infections like the common cold or flu.",
        source: "CDC - https://www.cdc.gov/antibiotic-use/community/about/antibiotic-resistance-faqs.html",
        claims: &[
            ("Medical", "antibiotic effectiveness"),
            ("Pathogen", "viral vs bacterial"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "The human body contains approximately 37 trillion cells",
        answer: StaticAnswer::Fact(Verdict::True),
        confidence: 85,
        explanation: "Recent scientific estimates suggest the human body contains approximately 37.2 trillion cells, though this number varies by individual.",
        source: "PLOS Biology - https://journals.plos.org/plosbiology/article?id=10.1371/journal.pbio.1002533",
        claims: &[
            ("Numerical", "37 trillion"),
            ("Biological", "human cell count"),
        ],
        entities: &[],
    },
    StaticAnswerEntry {
        question: "Gold is heavier than lead",
        answer: StaticAnswer::Fact(Verdict::True),
        confidence: 99,
        explanation: "Gold has a density of 19.3 g/cm³ while lead has a density of 11.3 g/cm³, making gold significantly heavier.",
        source: "Royal Society of Chemistry - https://www.rsc.org/periodic-table/element/79/gold",
        claims: &[
            ("Density", "gold vs lead"),
            ("Physical property", "weight comparison"),
        ],
        entities: &[],
    },
];

/// Emotional entries, checked after the factual ones
pub static EMOTIONAL_ANSWERS: &[StaticAnswerEntry] = &[
    StaticAnswerEntry {
        question: "This movie is absolutely terrible and a waste of time",
        answer: StaticAnswer::Emotion(Sentiment::Negative),
        confidence: 91,
        explanation: "Strong negative sentiment with emotional language including 'absolutely terrible' and 'waste of time'.",
        source: "Sentiment analysis based on emotional language patterns",
        claims: &[],
        entities: &["terrible", "waste", "absolutely"],
    },
    StaticAnswerEntry {
        question: "I love spending time with my family during holidays",
        answer: StaticAnswer::Emotion(Sentiment::Positive),
        confidence: 88,
        explanation: "Positive emotional expression with personal attachment and affection towards family activities.",
        source: "Emotional pattern recognition for personal relationships",
        claims: &[],
        entities: &["love", "family", "holidays"],
    },
    StaticAnswerEntry {
        question: "The weather today is okay, nothing special",
        answer: StaticAnswer::Emotion(Sentiment::Neutral),
        confidence: 76,
        explanation: "Neutral sentiment with mild indifference, lacking strong emotional indicators.",
        source: "Neutral sentiment classification based on moderate language",
        claims: &[],
        entities: &["okay", "nothing special"],
    },
];

/// Every entry in lookup order
pub fn entries() -> impl Iterator<Item = &'static StaticAnswerEntry> {
    FACTUAL_ANSWERS.iter().chain(EMOTIONAL_ANSWERS.iter())
}

/// First entry matching `text`, if any. Blank text never matches.
pub fn lookup(text: &str) -> Option<&'static StaticAnswerEntry> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    entries().find(|entry| entry.matches(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let entry = lookup("Gold is heavier than lead").expect("entry should match");
        assert_eq!(entry.confidence, 99);
        assert_eq!(entry.answer, StaticAnswer::Fact(Verdict::True));
    }

    #[test]
    fn test_match_ignores_case_and_padding() {
        let entry = lookup("   LIGHTNING NEVER STRIKES THE SAME PLACE TWICE  ").expect("entry should match");
        assert_eq!(entry.question, "Lightning never strikes the same place twice");
    }

    #[test]
    fn test_text_containing_question_matches() {
        let entry = lookup("My uncle insists that gold is heavier than lead, is he right?")
            .expect("entry should match");
        assert_eq!(entry.question, "Gold is heavier than lead");
    }

    #[test]
    fn test_fragment_of_question_matches() {
        let entry = lookup("viral infections").expect("entry should match");
        assert_eq!(entry.question, "Antibiotics are effective against viral infections");
    }

    #[test]
    fn test_factual_entries_win_over_emotional() {
        // "the" occurs in both tables; the first factual entry wins
        let entry = lookup("the").expect("entry should match");
        assert_eq!(entry.question, FACTUAL_ANSWERS[0].question);
    }

    #[test]
    fn test_blank_text_never_matches() {
        assert!(lookup("").is_none());
        assert!(lookup(" \t\n").is_none());
    }

    #[test]
    fn test_unrelated_text_does_not_match() {
        assert!(lookup("Quarterly revenue grew for the third year running").is_none());
    }

    #[test]
    fn test_every_entry_matches_itself_first() {
        for entry in entries() {
            let found = lookup(entry.question).expect("entry should match itself");
            assert_eq!(found.question, entry.question);
        }
    }

    #[test]
    fn test_fact_record_from_entry() {
        let record = lookup("Water boils at 100 degrees Celsius at sea level")
            .expect("entry should match")
            .to_record();

        assert_eq!(record.category, Category::Fact);
        assert_eq!(record.verdict, Some(Verdict::True));
        assert_eq!(record.confidence, 98);
        assert_eq!(record.origin, RecordOrigin::StaticTable);
        assert!(record.summary.ends_with("This claim is TRUE."));
        assert_eq!(record.claims[0].to_string(), "Temperature claim: 100°C");
        let source = record.source.expect("static records carry a source");
        assert_eq!(source.title, "Encyclopedia Britannica");
        assert!(source.url.unwrap().contains("britannica.com"));
    }

    #[test]
    fn test_emotion_record_from_entry() {
        let record = EMOTIONAL_ANSWERS[0].to_record();

        assert_eq!(record.category, Category::Emotion);
        assert_eq!(record.sentiment, Some(Sentiment::Negative));
        assert!(record.verdict.is_none());
        assert_eq!(record.matched_entities, vec!["terrible", "waste", "absolutely"]);
        assert!(record.details.contains("high confidence"));
        assert!(record.source.expect("static records carry a source").url.is_none());
    }
}
