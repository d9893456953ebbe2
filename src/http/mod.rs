//! HTTP API server for external control (presentation layer seam)
//!
//! This module provides a REST API for controlling the captioning session:
//! - POST /session/start - Start the session
//! - POST /session/stop - Stop the session
//! - PUT /session/config - Change event type / detail level
//! - GET /session/status - Query session status
//! - GET /session/transcript - Get the transcript log
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
