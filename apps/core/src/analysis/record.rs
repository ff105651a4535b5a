//! Classification Record - Output structure of the text classifier.
//!
//! A record is a pure value: the same category, judgement, confidence and
//! extracted evidence always render to the same prose fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lowest confidence a record can carry
pub const MIN_CONFIDENCE: u8 = 60;
/// Highest confidence a record can carry
pub const MAX_CONFIDENCE: u8 = 99;

/// Fact-leaning or emotion-leaning text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fact,
    Emotion,
}

impl Category {
    /// Human-readable classification label shown on result cards
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fact => "Factual Statement",
            Category::Emotion => "Emotional Opinion",
        }
    }

    /// Name of the (simulated) model credited with the analysis
    pub fn model_name(&self) -> &'static str {
        match self {
            Category::Fact => "RoBERTa Fact-Checker",
            Category::Emotion => "NER Sentiment Analyzer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fact => write!(f, "fact"),
            Category::Emotion => write!(f, "emotion"),
        }
    }
}

/// Truth judgement for fact-leaning text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    False,
    Unsure,
}

impl Verdict {
    /// Adjective used in summaries ("appears to be accurate")
    pub fn assessment(&self) -> &'static str {
        match self {
            Verdict::True => "accurate",
            Verdict::False => "inaccurate",
            Verdict::Unsure => "uncertain",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::True => write!(f, "true"),
            Verdict::False => write!(f, "false"),
            Verdict::Unsure => write!(f, "unsure"),
        }
    }
}

/// Polarity judgement for emotion-leaning text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Coarse reading of a confidence value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 85 {
            ConfidenceBand::High
        } else if confidence > 70 {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceBand::High => write!(f, "high"),
            ConfidenceBand::Moderate => write!(f, "moderate"),
            ConfidenceBand::Low => write!(f, "low"),
        }
    }
}

/// What a claim asserts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    /// A number, optionally a percentage
    Numerical,
    /// A year or a written-out calendar date
    Date,
    /// A citation phrase ("according to ...") up to the sentence end
    Research,
    /// A kind authored in the static answer table ("Temperature", "Medical", ...)
    Curated(String),
}

impl ClaimKind {
    pub fn label(&self) -> String {
        match self {
            ClaimKind::Numerical => "Numerical claim".to_string(),
            ClaimKind::Date => "Date claim".to_string(),
            ClaimKind::Research => "Research claim".to_string(),
            ClaimKind::Curated(kind) => format!("{} claim", kind),
        }
    }
}

/// A substring of the input (or a curated statement) tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub kind: ClaimKind,
    pub text: String,
}

impl Claim {
    pub fn new(kind: ClaimKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.text)
    }
}

/// Reference attached to a curated answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: String,
    pub url: Option<String>,
}

impl SourceCitation {
    /// Split a "Publisher - https://..." reference into title and URL.
    /// References without a link keep the whole text as the title.
    pub fn parse(reference: &str) -> Self {
        match reference.split_once(" - ") {
            Some((title, url)) if url.starts_with("http") => Self {
                title: title.trim().to_string(),
                url: Some(url.trim().to_string()),
            },
            _ => Self {
                title: reference.trim().to_string(),
                url: None,
            },
        }
    }
}

/// Which path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    StaticTable,
    Heuristic,
}

/// Result of classifying one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub category: Category,
    /// Heuristic score in [60, 99], not a calibrated probability
    pub confidence: u8,
    /// Present only for `Category::Fact`
    pub verdict: Option<Verdict>,
    /// Present only for `Category::Emotion`
    pub sentiment: Option<Sentiment>,
    pub matched_entities: Vec<String>,
    pub claims: Vec<Claim>,
    pub source: Option<SourceCitation>,
    pub origin: RecordOrigin,
    pub label: String,
    pub model: String,
    pub summary: String,
    pub details: String,
}

impl ClassificationRecord {
    /// Record for fact-leaning text produced by the heuristic path
    pub fn heuristic_fact(verdict: Verdict, confidence: u8, claims: Vec<Claim>) -> Self {
        let summary = format!(
            "This text contains verifiable claims that can be fact-checked against reliable sources. \
             The information appears to be {} based on available evidence.",
            verdict.assessment()
        );
        let details = format!(
            "RoBERTa model analyzed {} factual claims and cross-referenced with knowledge bases. \
             Verification process included source credibility assessment, claim consistency checking, \
             and evidence correlation. The model's confidence in this {} verdict is {}% based on \
             available supporting evidence.",
            claims.len(),
            verdict,
            confidence
        );

        Self {
            category: Category::Fact,
            confidence,
            verdict: Some(verdict),
            sentiment: None,
            matched_entities: vec![],
            claims,
            source: None,
            origin: RecordOrigin::Heuristic,
            label: Category::Fact.label().to_string(),
            model: Category::Fact.model_name().to_string(),
            summary,
            details,
        }
    }

    /// Record for emotion-leaning text produced by the heuristic path
    pub fn heuristic_emotion(sentiment: Sentiment, confidence: u8, entities: Vec<String>) -> Self {
        let summary = format!(
            "This text expresses {} sentiment with emotional intensity. The content contains \
             subjective opinions and personal feelings rather than verifiable facts.",
            sentiment
        );
        let details = format!(
            "NER model identified {} emotional entities and classified overall sentiment as {}. \
             Detected subjective language patterns, personal expressions, and opinion-based statements. \
             Emotional intensity analysis shows {} confidence in emotional classification.",
            entities.len(),
            sentiment,
            ConfidenceBand::from_confidence(confidence)
        );

        Self {
            category: Category::Emotion,
            confidence,
            verdict: None,
            sentiment: Some(sentiment),
            matched_entities: entities,
            claims: vec![],
            source: None,
            origin: RecordOrigin::Heuristic,
            label: Category::Emotion.label().to_string(),
            model: Category::Emotion.model_name().to_string(),
            summary,
            details,
        }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }

    /// One-line description for logging
    pub fn summary_line(&self) -> String {
        let judgement = match (self.verdict, self.sentiment) {
            (Some(v), _) => v.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => "-".to_string(),
        };
        format!(
            "Category: {} ({}%, {}), Judgement: {}, Claims: {}, Entities: {}, Origin: {:?}",
            self.category,
            self.confidence,
            self.band(),
            judgement,
            self.claims.len(),
            self.matched_entities.len(),
            self.origin
        )
    }
}

/// Caller-facing envelope around a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub record: ClassificationRecord,
}
