//! Deterministic keyword-overlap scoring of a job description against
//! candidate text.
//!
//! The score is a calibrated lexical heuristic, not a model: job-description
//! terms are normalized, stripped of stop words and very short tokens, and
//! the share found anywhere in the candidate text is mapped onto a bounded
//! percentage. The flat bonus and the empty-input fallback are deliberate
//! calibration choices; changing them changes every stored score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Common words excluded from the job-description term set before matching.
const STOP_WORDS: [&str; 11] = [
    "and", "the", "a", "an", "in", "on", "at", "to", "for", "of", "with",
];

/// Calibration knobs for the fit-score heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Returned unchanged when either input is blank.
    pub default_score: u8,
    /// Flat addition applied before clamping to 100.
    pub match_bonus: u8,
    /// Job terms shorter than this are discarded.
    pub min_term_len: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_score: 50,
            match_bonus: 20,
            min_term_len: 3,
        }
    }
}

/// Score plus the distinct job terms split by candidate membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub score: u8,
    pub matched_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

/// Stateless scorer. Safe to call repeatedly and concurrently; identical
/// inputs always produce identical outputs.
#[derive(Debug, Clone, Default)]
pub struct FitScoreEngine {
    config: ScoringConfig,
}

impl FitScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Integer percentage in `[0, 100]` estimating how well the candidate
    /// text covers the job description's vocabulary.
    pub fn score(&self, job_text: &str, candidate_text: &str) -> u8 {
        self.report(job_text, candidate_text).score
    }

    /// Full breakdown: the score together with which distinct job terms the
    /// candidate text does and does not contain, in first-occurrence order.
    pub fn report(&self, job_text: &str, candidate_text: &str) -> FitReport {
        if job_text.trim().is_empty() || candidate_text.trim().is_empty() {
            return FitReport {
                score: self.config.default_score,
                matched_terms: Vec::new(),
                missing_terms: Vec::new(),
            };
        }

        let candidate_terms: HashSet<String> = tokenize(candidate_text).collect();

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for term in tokenize(job_text) {
            if term.len() < self.config.min_term_len || STOP_WORDS.contains(&term.as_str()) {
                continue;
            }
            if !seen.insert(term.clone()) {
                continue;
            }
            if candidate_terms.contains(&term) {
                matched.push(term);
            } else {
                missing.push(term);
            }
        }

        let distinct = matched.len() + missing.len();
        let raw = matched.len() as f64 / distinct.max(1) as f64;
        let score = ((raw * 100.0).round() as u32 + u32::from(self.config.match_bonus)).min(100);

        FitReport {
            score: score as u8,
            matched_terms: matched,
            missing_terms: missing,
        }
    }
}

/// Lowercase and split on runs of non-word characters (word = ASCII
/// alphanumeric or underscore), discarding empty tokens.
fn tokenize(text: &str) -> impl Iterator<Item = String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}
