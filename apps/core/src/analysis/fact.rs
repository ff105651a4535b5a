//! Fact branch: claim extraction, verdict and confidence.
//!
//! The verdict is a biased draw from a caller-supplied random source,
//! weighted by how much supporting evidence the text carries.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::record::{Claim, ClaimKind, ClassificationRecord, Verdict, MAX_CONFIDENCE, MIN_CONFIDENCE};
use super::signals::{TextSignals, CITATION_CLAIM, DATE_TOKEN, NUMBER_TOKEN};

const BASE_CONFIDENCE: u32 = 75;
const UNSURE_PENALTY: u32 = 15;
const LONG_TEXT: usize = 100;

/// How much supporting evidence a fact-leaning text carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// At least two claims, a citation and a number
    Strong,
    /// A number or a citation
    Partial,
    None,
}

impl Evidence {
    pub fn assess(signals: &TextSignals, claim_count: usize) -> Self {
        if claim_count >= 2 && signals.has_citation && signals.has_numbers {
            Evidence::Strong
        } else if signals.has_numbers || signals.has_citation {
            Evidence::Partial
        } else {
            Evidence::None
        }
    }

    /// Map a uniform draw in [0, 1) to a verdict
    pub fn verdict_from_draw(&self, draw: f64) -> Verdict {
        match self {
            Evidence::Strong => {
                if draw > 0.2 {
                    Verdict::True
                } else {
                    Verdict::Unsure
                }
            }
            Evidence::Partial => {
                if draw > 0.7 {
                    Verdict::True
                } else if draw > 0.4 {
                    Verdict::Unsure
                } else {
                    Verdict::False
                }
            }
            Evidence::None => {
                if draw > 0.6 {
                    Verdict::Unsure
                } else {
                    Verdict::False
                }
            }
        }
    }
}

/// Analyzer for fact-leaning text
#[derive(Debug, Default, Clone, Copy)]
pub struct FactAnalyzer;

impl FactAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Numbers first, then dates, then citation phrases, each in text order
    pub fn extract_claims(&self, text: &str) -> Vec<Claim> {
        let numbers = NUMBER_TOKEN
            .find_iter(text)
            .map(|m| Claim::new(ClaimKind::Numerical, m.as_str()));
        let dates = DATE_TOKEN
            .find_iter(text)
            .map(|m| Claim::new(ClaimKind::Date, m.as_str()));
        let citations = CITATION_CLAIM
            .find_iter(text)
            .map(|m| Claim::new(ClaimKind::Research, m.as_str()));

        numbers.chain(dates).chain(citations).collect()
    }

    pub fn verdict<R: Rng + ?Sized>(&self, evidence: Evidence, rng: &mut R) -> Verdict {
        let draw: f64 = rng.gen();
        evidence.verdict_from_draw(draw)
    }

    pub fn confidence(&self, signals: &TextSignals, claim_count: usize, verdict: Verdict) -> u8 {
        let claims = u32::try_from(claim_count).unwrap_or(u32::MAX);
        let bonus = if signals.has_percentage { 6 } else { 0 }
            + if signals.has_citation { 10 } else { 0 }
            + if signals.length > LONG_TEXT { 3 } else { 0 };
        let mut confidence = BASE_CONFIDENCE
            .saturating_add(claims.saturating_mul(4))
            .saturating_add(bonus);

        if verdict == Verdict::Unsure {
            confidence = confidence
                .saturating_sub(UNSURE_PENALTY)
                .max(MIN_CONFIDENCE as u32);
        }

        confidence.min(MAX_CONFIDENCE as u32) as u8
    }

    pub fn analyze<R: Rng + ?Sized>(
        &self,
        text: &str,
        signals: &TextSignals,
        rng: &mut R,
    ) -> ClassificationRecord {
        let claims = self.extract_claims(text);
        let evidence = Evidence::assess(signals, claims.len());
        let verdict = self.verdict(evidence, rng);
        let confidence = self.confidence(signals, claims.len(), verdict);

        tracing::trace!(?evidence, %verdict, confidence, "Fact branch scored");

        ClassificationRecord::heuristic_fact(verdict, confidence, claims)
    }
}
