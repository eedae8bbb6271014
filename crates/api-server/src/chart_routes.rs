//! Chart Request API Routes
//!
//! Turns a free-text message into a typed chart payload via the dispatcher.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chart_dispatch::{build_chart_response, ChartRequestReply};
use serde::Deserialize;

use crate::{ApiResponse, AppError, AppState};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ChartMessageRequest {
    pub message: String,
}

pub fn chart_routes() -> Router<AppState> {
    Router::new().route("/api/chart-request", post(create_chart))
}

#[utoipa::path(
    post,
    path = "/api/chart-request",
    request_body = ChartMessageRequest,
    responses(
        (status = 200, description = "Assistant text plus chart data for the matched intent"),
        (status = 400, description = "Empty message"),
    ),
    tag = "Charts"
)]
pub async fn create_chart(
    State(_state): State<AppState>,
    Json(req): Json<ChartMessageRequest>,
) -> Result<Json<ApiResponse<ChartRequestReply>>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    let reply = build_chart_response(message)?;

    tracing::debug!(chart = reply.chart_data.title(), "chart request served");

    Ok(Json(ApiResponse::success(reply)))
}
