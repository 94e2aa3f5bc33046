use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Bot,
}

impl SenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderType::User => "user",
            SenderType::Bot => "bot",
        }
    }
}

/// A stored chat message, shaped for the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message id, stringified for the wire.
    pub id: String,
    pub sender_type: String,
    pub content: String,
    /// Reply metadata blob; an empty object when none was stored.
    #[serde(default)]
    pub metadata: Value,
    pub created_at: String,
}

/// A conversation row joined with its messages, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationView {
    pub conversation_id: String,
    pub channel: String,
    pub status: String,
    pub created_at: String,
    pub messages: Vec<Message>,
}
