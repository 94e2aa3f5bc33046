//! Deskbot FAQ retrieval core.
//!
//! This crate turns a free-text support message into either a confident FAQ
//! match or an explicit "no match", nothing else. It owns no persistence,
//! no HTTP, and no process lifecycle; callers supply the candidate entries
//! and consume the decision.
//!
//! ## What we do
//!
//! - Normalize text into a comparable token set (lowercase, alphanumeric
//!   splitting, stopword and short-word filtering)
//! - Score each candidate by lexical overlap against the query
//! - Select the single best candidate, gated by a confidence threshold
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared mutable state. Same query + same
//! candidate list (same order) = same result, on any machine, from any
//! number of concurrent callers.
//!
//! ## Invariants worth knowing
//!
//! - A query whose token set is empty never matches anything
//! - The returned entry is the highest-scoring candidate, ties broken by
//!   input order (first seen wins)
//! - The threshold is applied once, after all candidates are scored
//! - Inactive entries must be filtered out by the supplier; the matcher
//!   only sees the fields it scores
//!
//! ## Core Types
//!
//! - [`FaqEntry`]: read-only candidate shape supplied by the caller.
//! - [`FaqMatch`]: the selected entry plus its similarity score.
//! - [`MatchConfig`]: threshold knob with a `validate()` guard.
//! - [`FaqMatcher`]: the engine; scoring is a replaceable [`Scorer`]
//!   strategy so the lexical formula can later be swapped for embedding
//!   similarity without touching the contract.

pub mod engine;
pub mod token;
pub mod types;

pub use crate::engine::{find_best_match, FaqMatcher, Scorer, TokenOverlap};
pub use crate::token::tokenize;
pub use crate::types::{FaqEntry, FaqMatch, MatchConfig, MatchError};

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> std::collections::HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn tokenize_lowercases_and_splits_on_punctuation() {
        let tokens = tokenize("Where IS my ORDER?!");
        assert_eq!(tokens, set(&["where", "order"]));
    }

    #[test]
    fn tokenize_drops_stopwords_and_short_words() {
        // Every word except "refund" is a stopword or shorter than two chars.
        let tokens = tokenize("Can you please help me with a refund?");
        assert_eq!(tokens, set(&["refund"]));
    }

    #[test]
    fn tokenize_collapses_duplicates() {
        let tokens = tokenize("refund refund REFUND refund");
        assert_eq!(tokens, set(&["refund"]));
    }

    #[test]
    fn tokenize_empty_and_noise_inputs_yield_empty_sets() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
        assert!(tokenize("the a to").is_empty());
        assert!(tokenize("x y z").is_empty());
    }

    #[test]
    fn tokenize_treats_unrecognized_characters_as_separators() {
        let tokens = tokenize("track\u{0000}shipment\u{FFFD}status");
        assert_eq!(tokens, set(&["track", "shipment", "status"]));
    }

    #[test]
    fn tokenize_keeps_digits_and_mixed_words() {
        let tokens = tokenize("order #12345 from store24");
        assert_eq!(tokens, set(&["order", "12345", "from", "store24"]));
    }

    #[test]
    fn tokenize_handles_non_ascii_letters() {
        let tokens = tokenize("Wo ist meine Bestellung, bitte?");
        assert_eq!(tokens, set(&["wo", "ist", "meine", "bestellung", "bitte"]));
    }
}
