//! Bot reply selection.
//!
//! The matching core returns a decision; this module turns it into the
//! reply the user sees. A confident FAQ match answers with the entry's
//! stored text and carries its confidence; anything else falls back to a
//! generic acknowledgment with a fixed low confidence.

use faq::FaqMatch;
use serde::{Deserialize, Serialize};

/// Fallback reply used when no FAQ entry is confident enough.
pub const FALLBACK_REPLY: &str = "Thanks! I got your message. How can I help you next?";

/// Confidence attached to the fallback reply.
pub const FALLBACK_CONFIDENCE: f32 = 0.2;

/// Where a bot reply came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Faq,
    Stub,
}

/// Metadata stored alongside a bot message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyMeta {
    /// Match score rounded to two decimals, or the fixed stub confidence.
    pub confidence: f32,
    pub language: String,
    pub source: ReplySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_id: Option<i64>,
}

/// A selected bot reply: text plus the metadata to persist with it.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub text: String,
    pub metadata: ReplyMeta,
}

/// Decide the bot reply for a match outcome.
pub fn select_reply(outcome: Option<FaqMatch>, language: &str) -> BotReply {
    match outcome {
        Some(matched) => BotReply {
            metadata: ReplyMeta {
                confidence: round2(matched.score),
                language: language.to_string(),
                source: ReplySource::Faq,
                faq_id: Some(matched.id),
            },
            text: matched.answer,
        },
        None => BotReply {
            text: FALLBACK_REPLY.to_string(),
            metadata: ReplyMeta {
                confidence: FALLBACK_CONFIDENCE,
                language: language.to_string(),
                source: ReplySource::Stub,
                faq_id: None,
            },
        },
    }
}

fn round2(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}
