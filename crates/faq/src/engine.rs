use std::collections::HashSet;

use crate::token::tokenize;
use crate::types::{FaqEntry, FaqMatch, MatchConfig};


/// Scoring strategy: maps a query token set and a candidate token set to a
/// similarity in [0.0, 1.0].
///
/// The engine treats the scorer as opaque, so the lexical formula can be
/// replaced (for example by cosine similarity over embeddings) while the
/// [`FaqMatcher`] contract and threshold semantics stay fixed.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &HashSet<String>, candidate: &HashSet<String>) -> f32;
}

/// Default lexical scorer: the fraction of the query's distinct terms that
/// also appear in the candidate.
///
/// The denominator is the query's token count, floored at 1, never the
/// candidate's. An entry with many extra irrelevant tokens is not penalized;
/// only how much of the query it covers matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlap;

impl Scorer for TokenOverlap {
    fn score(&self, query: &HashSet<String>, candidate: &HashSet<String>) -> f32 {
        let overlap = query.intersection(candidate).count();
        overlap as f32 / query.len().max(1) as f32
    }
}

/// Matcher over caller-supplied FAQ candidates.
///
/// Stateless apart from its configuration; any number of calls may run
/// concurrently.
pub struct FaqMatcher {
    config: MatchConfig,
    scorer: Box<dyn Scorer>,
}

impl FaqMatcher {
    /// Construct a matcher with the default lexical scorer.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            scorer: Box::new(TokenOverlap),
        }
    }

    /// Construct a matcher with a custom scoring strategy.
    pub fn with_scorer(config: MatchConfig, scorer: Box<dyn Scorer>) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Find the single best-scoring candidate at or above the confidence
    /// threshold.
    ///
    /// Candidates are scored in the given order; the running best is kept by
    /// strict `>` comparison, so the first candidate with the maximum score
    /// wins ties. The threshold is applied once, after every candidate has
    /// been scored. A query with no meaningful tokens returns `None`
    /// immediately: it cannot be scored against anything and must not
    /// produce a spurious overlap against terse entries.
    pub fn find_best_match(&self, query: &str, candidates: &[FaqEntry]) -> Option<FaqMatch> {
        let q_tokens = tokenize(query);
        if q_tokens.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (idx, entry) in candidates.iter().enumerate() {
            // Question and tags form a single searchable text, tags
            // defaulting to empty when absent.
            let haystack = match entry.tags.as_deref() {
                Some(tags) => format!("{} {}", entry.question, tags),
                None => entry.question.clone(),
            };
            let c_tokens = tokenize(&haystack);
            let score = self.scorer.score(&q_tokens, &c_tokens);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        let (idx, score) = best?;
        if score < self.config.threshold {
            return None;
        }

        let entry = &candidates[idx];
        Some(FaqMatch {
            id: entry.id,
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            tags: entry.tags.clone().unwrap_or_default(),
            language: entry.language.clone(),
            score,
        })
    }
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Convenience entry point using the default configuration and scorer.
pub fn find_best_match(query: &str, candidates: &[FaqEntry]) -> Option<FaqMatch> {
    FaqMatcher::default().find_best_match(query, candidates)
}
