//! Captioning session management
//!
//! This module provides the `DescriberSession` orchestrator that manages:
//! - Continuous speech capture and restart-on-end policy
//! - Debounced accumulation of finalized fragments into segments
//! - Serialized (at most one in flight) description requests
//! - Spoken playback of generated descriptions
//! - The ordered transcript log and session state snapshots

mod config;
mod session;
mod stats;
mod status;
mod transcript;

pub use config::SessionConfig;
pub use session::DescriberSession;
pub use stats::SessionStats;
pub use status::Status;
pub use transcript::{TranscriptItem, TranscriptKind, TranscriptLog};
