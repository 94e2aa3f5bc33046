use crate::error::ServerResult;
use crate::reply::select_reply;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::{Message, SenderType};

/// Send-message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Existing conversation to append to; a new one is created when absent
    #[serde(default)]
    pub conversation_id: Option<String>,

    /// Browser session or device identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// The user's message text
    pub text: String,

    /// Originating channel, e.g. "web"
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Language code used for FAQ lookup
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_channel() -> String {
    "web".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Send-message response: the stored user message plus the bot reply
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub conversation_id: String,
    pub user_message: MessageSummary,
    pub bot_message: MessageSummary,
    pub status: String,
}

/// Message fields echoed back by the send endpoint. Metadata stays out of
/// this shape; it is visible on the conversation read.
#[derive(Debug, Serialize)]
pub struct MessageSummary {
    pub id: String,
    pub sender_type: String,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageSummary {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_type: message.sender_type,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Accept a user message and produce the bot reply.
///
/// The flow mirrors a single support-chat turn:
/// 1. Ensure the conversation exists (creating it when the client did not
///    supply an id; a blank id counts as absent)
/// 2. Persist the user message
/// 3. Match the text against the active FAQ entries for the language
/// 4. Persist the bot reply with its confidence metadata
/// 5. Bump the conversation's `updated_at`
pub async fn send_message(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<SendMessageRequest>,
) -> ServerResult<impl IntoResponse> {
    let conversation_id = payload
        .conversation_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

    if !state.store.conversation_exists(&conversation_id)? {
        state.store.create_conversation(
            &conversation_id,
            payload.session_id.as_deref(),
            &payload.channel,
        )?;
    }

    let user_message =
        state
            .store
            .insert_message(&conversation_id, SenderType::User, &payload.text, None)?;

    let candidates = state.store.fetch_faq_entries(&payload.language)?;
    let outcome = state.matcher.find_best_match(&payload.text, &candidates);
    tracing::debug!(
        conversation_id = %conversation_id,
        candidates = candidates.len(),
        matched = outcome.is_some(),
        "faq lookup"
    );

    let reply = select_reply(outcome, &payload.language);
    let metadata = serde_json::to_value(&reply.metadata)?;
    let bot_message = state.store.insert_message(
        &conversation_id,
        SenderType::Bot,
        &reply.text,
        Some(&metadata),
    )?;

    state.store.touch_conversation(&conversation_id)?;

    Ok(Json(SendMessageResponse {
        conversation_id,
        user_message: user_message.into(),
        bot_message: bot_message.into(),
        status: "open".to_string(),
    }))
}
