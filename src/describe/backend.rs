use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel response meaning "no visual description is warranted".
pub const NO_DESCRIPTION: &str = "NONE";

/// Returns true if a backend response is the no-description sentinel.
pub fn is_no_description(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(NO_DESCRIPTION)
}

/// Kind of live event being described; selects the system instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "Webinar/Presentation")]
    Webinar,
    Sports,
    Conference,
    Emergency,
    #[default]
    General,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventType::Webinar => "Webinar/Presentation",
            EventType::Sports => "Sports",
            EventType::Conference => "Conference",
            EventType::Emergency => "Emergency",
            EventType::General => "General",
        };
        write!(f, "{}", label)
    }
}

/// How much visual detail the listener wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailLevel {
    Minimal,
    #[default]
    Standard,
    Detailed,
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DetailLevel::Minimal => "Minimal",
            DetailLevel::Standard => "Standard",
            DetailLevel::Detailed => "Detailed",
        };
        write!(f, "{}", label)
    }
}

/// Description generation backend trait
///
/// Contract: returns the literal string "NONE" (case-insensitive) when no
/// description is warranted for the segment; otherwise a single concise
/// sentence. Any error is treated as recoverable by the caller.
#[async_trait::async_trait]
pub trait DescriptionBackend: Send + Sync {
    /// Generate an optional visual description for a transcript segment
    async fn generate_description(
        &self,
        segment: &str,
        event_type: EventType,
        detail_level: DetailLevel,
    ) -> Result<String>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
