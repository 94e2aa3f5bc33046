use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single FAQ entry supplied by the candidate store.
///
/// Read-only from the matcher's perspective. Inactive entries must already
/// be filtered out by the supplier; this shape only carries the fields the
/// matcher scores and echoes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqEntry {
    /// Stable, unique identifier assigned by the store.
    pub id: i64,
    /// The curated question text; part of the searchable haystack.
    pub question: String,
    /// Answer text, returned verbatim on a match.
    pub answer: String,
    /// Comma-separated free-text tags; part of the searchable haystack.
    #[serde(default)]
    pub tags: Option<String>,
    /// Language code, e.g. "en".
    pub language: String,
}

/// A matched FAQ entry with its similarity score.
///
/// Returned only when the best candidate clears the confidence threshold;
/// absence of a match is `None`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqMatch {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Tags of the matched entry, empty string when the entry had none.
    pub tags: String,
    pub language: String,
    /// Similarity in [0.0, 1.0]: the fraction of the query's distinct
    /// meaningful terms covered by the entry. Not a probability.
    pub score: f32,
}

/// Configuration for the matcher. Cheap to clone and serde-friendly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum score the best candidate must reach to be returned.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f32,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f32 {
        0.34
    }

    /// Validate the configuration before use.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(MatchError::InvalidConfig(
                "threshold must be within (0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Matching itself is total; only configuration can be rejected.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
