//! Chat API Routes
//!
//! Mocked assistant endpoint: rotation-flavored messages get the rotation
//! reply, everything else alternates between the two canned line-chart
//! replies via the state's cursor.

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chart_dispatch::chat::{select_reply, ChatReply};
use serde::Deserialize;

use crate::{ApiResponse, AppError, AppState};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ChatMessageRequest {
    pub message: String,
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/api/chat", post(send_message))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Assistant reply with zero or more charts"),
        (status = 400, description = "Empty message"),
    ),
    tag = "Chat"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    let cursor = state.chat_cursor.fetch_add(1, Ordering::Relaxed);
    let reply = select_reply(message, cursor);

    Ok(Json(ApiResponse::success(reply)))
}
