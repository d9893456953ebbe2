use super::state::AppState;
use crate::describe::{DetailLevel, EventType};
use crate::error::SessionError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfigRequest {
    /// New event type, if changing
    pub event_type: Option<EventType>,

    /// New detail level, if changing
    pub detail_level: Option<DetailLevel>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/start
/// Start the captioning session
pub async fn start_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("Start requested");

    match state.session.start().await {
        Ok(()) => (
            StatusCode::OK,
            Json(CommandResponse {
                status: "listening".to_string(),
                message: "Session started".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to start session: {}", e);
            let code = match e {
                SessionError::Permission | SessionError::Device => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                code,
                Json(ErrorResponse {
                    error: format!("Failed to start session: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /session/stop
/// Stop the captioning session
pub async fn stop_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("Stop requested");

    match state.session.stop().await {
        Ok(()) => {
            let stats = state.session.stats().await;
            (StatusCode::OK, Json(stats)).into_response()
        }
        Err(e) => {
            error!("Failed to stop session: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to stop session: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /session/status
/// Get a snapshot of session state
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.session.stats().await;
    (StatusCode::OK, Json(stats)).into_response()
}

/// GET /session/transcript
/// Get the transcript log accumulated so far
pub async fn get_transcript(State(state): State<AppState>) -> impl IntoResponse {
    let transcript = state.session.transcript().await;
    (StatusCode::OK, Json(transcript)).into_response()
}

/// PUT /session/config
/// Change event type / detail level; rejected while a session is active
pub async fn set_config(
    State(state): State<AppState>,
    Json(req): Json<SessionConfigRequest>,
) -> impl IntoResponse {
    if let Some(event_type) = req.event_type {
        if let Err(e) = state.session.set_event_type(event_type).await {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    }

    if let Some(detail_level) = req.detail_level {
        if let Err(e) = state.session.set_detail_level(detail_level).await {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    }

    (
        StatusCode::OK,
        Json(CommandResponse {
            status: "ok".to_string(),
            message: "Configuration updated".to_string(),
        }),
    )
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
