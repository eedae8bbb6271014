//! FinChat API Server
//!
//! HTTP front for the chart dispatcher and mocked chat assistant:
//! `/api/chart-request` and `/api/chat`, plus health and an OpenAPI
//! document. All state is request-scoped through `AppState`; nothing is a
//! process global.

pub mod chart_routes;
pub mod chat_routes;
mod request_id;


use std::env;
use std::net::SocketAddr;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

/// Shared handler state. Cheap to clone; the chat cursor drives the
/// deterministic round-robin over canned chat replies.
#[derive(Clone, Default)]
pub struct AppState {
    pub chat_cursor: Arc<AtomicUsize>,
}

/// Standard envelope for every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

/// Error adapter for handlers: any `anyhow`-convertible error becomes a 500
/// wrapped in the standard envelope; `bad_request` marks caller mistakes.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    source: anyhow::Error,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            source: anyhow::anyhow!(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.source, "request failed");
        } else {
            tracing::warn!(error = %self.source, "request rejected");
        }

        (
            self.status,
            Json(ApiResponse::<()>::error(self.source.to_string())),
        )
            .into_response()
    }
}

/// Server bind configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("FINCHAT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("FINCHAT_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("FINCHAT_PORT must be a port number, got '{raw}'"))?,
            Err(_) => 3001,
        };
        Ok(Self { host, port })
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FinChat API",
        description = "Chart request and chat endpoints for the FinChat dashboard"
    ),
    paths(
        chart_routes::create_chart,
        chat_routes::send_message,
        health,
    ),
    components(schemas(
        chart_routes::ChartMessageRequest,
        chat_routes::ChatMessageRequest,
    ))
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "Meta"
)]
async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the full router with middleware and state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi_json))
        .merge(chart_routes::chart_routes())
        .merge(chat_routes::chat_routes())
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Entry point: load env config, install tracing, bind, and serve.
pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::default());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    tracing::info!(%addr, "finchat api server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
