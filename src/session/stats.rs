use super::status::Status;
use crate::describe::{DetailLevel, EventType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a captioning session's state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current lifecycle state
    pub status: Status,

    /// Whether a session is currently active
    pub active: bool,

    /// When the current (or last) session started, if any
    pub started_at: Option<DateTime<Utc>>,

    /// Seconds since the session started
    pub duration_secs: f64,

    /// Number of transcript log entries
    pub transcript_items: usize,

    /// Configured event type
    pub event_type: EventType,

    /// Configured detail level
    pub detail_level: DetailLevel,
}
