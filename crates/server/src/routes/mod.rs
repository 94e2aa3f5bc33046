//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health and readiness checks
//! - `messages`: Message ingestion and bot replies
//! - `conversations`: Conversation reads

pub mod conversations;
pub mod health;
pub mod messages;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no request body.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Deskbot Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/messages",
            "/api/conversations/{conversation_id}",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
