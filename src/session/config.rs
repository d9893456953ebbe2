use crate::speech::VoiceSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a captioning session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g. "caption-2026-08-23-keynote")
    pub session_id: String,

    /// Quiet period after the last final fragment before the accumulated
    /// segment is sent for analysis
    pub debounce: Duration,

    /// Delay before a segment queued behind an in-flight analysis is
    /// picked up, once that analysis completes
    pub followup_delay: Duration,

    /// Delay before the recognition stream is restarted after it ends
    /// unexpectedly
    pub restart_delay: Duration,

    /// Cooldown after a backend failure before the session resumes
    /// listening
    pub error_cooldown: Duration,

    /// Segments shorter than this (after trimming) are never analyzed
    pub min_segment_chars: usize,

    /// Voice used for spoken descriptions
    pub voice: VoiceSettings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("caption-{}", uuid::Uuid::new_v4()),
            debounce: Duration::from_millis(2000),
            followup_delay: Duration::from_millis(1000),
            restart_delay: Duration::from_millis(1000),
            error_cooldown: Duration::from_millis(2000),
            min_segment_chars: 5,
            voice: VoiceSettings::default(),
        }
    }
}
