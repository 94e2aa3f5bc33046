use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Fetch a conversation with all of its messages, oldest first.
///
/// Returns 404 when the conversation does not exist.
pub async fn read_conversation(
    State(state): State<Arc<ServerState>>,
    Path(conversation_id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let view = state
        .store
        .get_conversation(&conversation_id)?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(view))
}
