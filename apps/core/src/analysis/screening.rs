//! News Screener - credibility screening of news snippets.
//!
//! Emotional or personal messages are routed away from fact-checking with a
//! supportive note. Everything else gets simulated true/false/not-sure
//! scores, biased by misinformation and hedging vocabulary, and a list of
//! fact-checking sources picked by topic.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

const EMOTIONAL_KEYWORDS: &[&str] = &[
    "feel", "sad", "happy", "angry", "love", "hate", "depressed", "anxious", "worried", "excited",
    "scared", "lonely", "hurt", "pain", "joy", "fear",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "i am",
    "i'm",
    "my life",
    "help me",
    "what should i",
    "how do i",
    "advice",
    "personal",
    "relationship",
    "family",
    "friend",
];

const MISINFORMATION_KEYWORDS: &[&str] =
    &["fake", "hoax", "conspiracy", "unverified", "rumor", "debunked"];

const UNCERTAIN_KEYWORDS: &[&str] = &["claims", "allegedly", "reports suggest", "sources say"];

/// Confidence reported when a message is routed away from fact-checking
const ROUTED_CONFIDENCE: f64 = 95.0;

/// Outcome of screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    Reliable,
    Misinformation,
    Uncertain,
    Emotional,
    Personal,
}

impl ScreeningStatus {
    pub fn explanation(&self) -> &'static str {
        match self {
            ScreeningStatus::Reliable => {
                "RoBERTa analysis indicates this content is likely factual. Cross-referenced with multiple trusted sources."
            }
            ScreeningStatus::Misinformation => {
                "RoBERTa classification suggests this content may contain misinformation. Please verify with trusted sources."
            }
            ScreeningStatus::Uncertain => {
                "RoBERTa analysis shows uncertainty. Additional verification recommended before sharing."
            }
            ScreeningStatus::Emotional => {
                "I understand you're sharing something emotional. While I'm designed to detect misinformation in news, I want you to know that your feelings are valid. Consider reaching out to friends, family, or a mental health professional for support."
            }
            ScreeningStatus::Personal => {
                "This appears to be a personal question. While Krivya is designed to analyze news credibility, I encourage you to seek advice from trusted friends, family, or professionals for personal matters."
            }
        }
    }
}

/// Three-way credibility class of a news snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityClass {
    True,
    False,
    NotSure,
}

/// Scores over the three credibility classes; they sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxScores {
    #[serde(rename = "true")]
    pub true_score: f64,
    #[serde(rename = "false")]
    pub false_score: f64,
    pub not_sure: f64,
}

impl SoftmaxScores {
    pub fn classification(&self) -> CredibilityClass {
        if self.true_score > self.false_score && self.true_score > self.not_sure {
            CredibilityClass::True
        } else if self.false_score > self.not_sure {
            CredibilityClass::False
        } else {
            CredibilityClass::NotSure
        }
    }

    pub fn max(&self) -> f64 {
        self.true_score.max(self.false_score).max(self.not_sure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

/// A fact-checking reference suggested for a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckSource {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub reliability: Reliability,
    pub highlight_text: String,
}

impl FactCheckSource {
    fn new(title: &str, url: &str, excerpt: &str, reliability: Reliability, highlight: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            excerpt: excerpt.to_string(),
            reliability,
            highlight_text: highlight.to_string(),
        }
    }
}

/// Model output for snippets that went through fact-checking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityAnalysis {
    pub classification: CredibilityClass,
    pub scores: SoftmaxScores,
    pub sources: Vec<FactCheckSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub status: ScreeningStatus,
    /// Percentage in [0, 100]
    pub confidence: f64,
    pub explanation: String,
    /// Absent when the snippet was routed as emotional or personal
    pub analysis: Option<CredibilityAnalysis>,
}

/// Screener for news snippets
#[derive(Debug, Default, Clone, Copy)]
pub struct NewsScreener;

impl NewsScreener {
    pub fn new() -> Self {
        Self
    }

    pub fn screen<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AppResult<ScreeningReport> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Nothing to screen: text is empty".to_string()));
        }

        let lowered = text.to_lowercase();
        let has_emotional = contains_any(&lowered, EMOTIONAL_KEYWORDS);
        let has_personal = contains_any(&lowered, PERSONAL_KEYWORDS);

        if has_emotional || has_personal {
            let status = if has_emotional {
                ScreeningStatus::Emotional
            } else {
                ScreeningStatus::Personal
            };
            debug!(?status, "Routed away from fact-checking");
            return Ok(ScreeningReport {
                status,
                confidence: ROUTED_CONFIDENCE,
                explanation: status.explanation().to_string(),
                analysis: None,
            });
        }

        let scores = self.score(&lowered, rng);
        let classification = scores.classification();
        let status = match classification {
            CredibilityClass::True => ScreeningStatus::Reliable,
            CredibilityClass::False => ScreeningStatus::Misinformation,
            CredibilityClass::NotSure => ScreeningStatus::Uncertain,
        };
        debug!(?status, ?scores, "News snippet screened");

        Ok(ScreeningReport {
            status,
            confidence: scores.max() * 100.0,
            explanation: status.explanation().to_string(),
            analysis: Some(CredibilityAnalysis {
                classification,
                scores,
                sources: sources_for(&lowered),
            }),
        })
    }

    /// Draw scores for lowercased `lowered`
    fn score<R: Rng + ?Sized>(&self, lowered: &str, rng: &mut R) -> SoftmaxScores {
        if contains_any(lowered, MISINFORMATION_KEYWORDS) {
            let false_score = 0.65 + rng.gen::<f64>() * 0.25;
            let true_score = 0.15 + rng.gen::<f64>() * 0.15;
            SoftmaxScores {
                true_score,
                false_score,
                not_sure: 1.0 - true_score - false_score,
            }
        } else if contains_any(lowered, UNCERTAIN_KEYWORDS) {
            let not_sure = 0.45 + rng.gen::<f64>() * 0.25;
            let true_score = 0.25 + rng.gen::<f64>() * 0.2;
            SoftmaxScores {
                true_score,
                false_score: 1.0 - true_score - not_sure,
                not_sure,
            }
        } else {
            let true_score = 0.6 + rng.gen::<f64>() * 0.25;
            let false_score = 0.1 + rng.gen::<f64>() * 0.15;
            SoftmaxScores {
                true_score,
                false_score,
                not_sure: 1.0 - true_score - false_score,
            }
        }
    }
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// Fact-checking references for the topic of `lowered`
pub fn sources_for(lowered: &str) -> Vec<FactCheckSource> {
    if lowered.contains("vaccine") || lowered.contains("covid") {
        vec![
            FactCheckSource::new(
                "CDC Vaccine Facts",
                "https://www.cdc.gov/vaccines/facts/index.html",
                "The CDC provides comprehensive information about vaccine safety and effectiveness based on rigorous scientific research...",
                Reliability::High,
                "vaccine safety and effectiveness based on rigorous scientific research",
            ),
            FactCheckSource::new(
                "WHO Vaccine Safety",
                "https://www.who.int/news-room/feature-stories/detail/how-are-vaccines-developed",
                "The World Health Organization explains the thorough testing process vaccines undergo before approval...",
                Reliability::High,
                "thorough testing process vaccines undergo before approval",
            ),
        ]
    } else if lowered.contains("climate") || lowered.contains("global warming") {
        vec![
            FactCheckSource::new(
                "NASA Climate Change Evidence",
                "https://climate.nasa.gov/evidence/",
                "NASA presents multiple lines of evidence for climate change including temperature records, ice core data...",
                Reliability::High,
                "multiple lines of evidence for climate change",
            ),
            FactCheckSource::new(
                "IPCC Climate Reports",
                "https://www.ipcc.ch/reports/",
                "The Intergovernmental Panel on Climate Change provides comprehensive assessments of climate science...",
                Reliability::High,
                "comprehensive assessments of climate science",
            ),
        ]
    } else if lowered.contains("election") || lowered.contains("voting") {
        vec![
            FactCheckSource::new(
                "Reuters Election Fact Check",
                "https://www.reuters.com/fact-check/",
                "Reuters fact-checking team verifies election-related claims using official sources and documentation...",
                Reliability::High,
                "verifies election-related claims using official sources",
            ),
            FactCheckSource::new(
                "AP Election Security",
                "https://apnews.com/hub/election-2024",
                "Associated Press provides verified reporting on election processes and security measures...",
                Reliability::High,
                "verified reporting on election processes and security measures",
            ),
        ]
    } else {
        vec![
            FactCheckSource::new(
                "Snopes Fact Check",
                "https://www.snopes.com/",
                "Snopes investigates and verifies claims through primary sources and expert consultation...",
                Reliability::High,
                "investigates and verifies claims through primary sources",
            ),
            FactCheckSource::new(
                "PolitiFact Truth-O-Meter",
                "https://www.politifact.com/",
                "PolitiFact rates the accuracy of claims made by public figures and institutions...",
                Reliability::High,
                "rates the accuracy of claims made by public figures",
            ),
            FactCheckSource::new(
                "FactCheck.org Analysis",
                "https://www.factcheck.org/",
                "FactCheck.org provides nonpartisan analysis of factual claims in politics and policy...",
                Reliability::Medium,
                "nonpartisan analysis of factual claims",
            ),
        ]
    }
}
