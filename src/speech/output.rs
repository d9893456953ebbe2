use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Voice parameters for spoken descriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Speaking rate multiplier (1.0 = normal)
    pub rate: f32,
    /// Voice pitch multiplier (1.0 = normal)
    pub pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        // Slightly faster than normal so descriptions keep up with live speech
        Self { rate: 1.1, pitch: 1.0 }
    }
}

/// Text-to-speech output trait
///
/// The orchestrator queues at most one utterance at a time: `speak` must
/// resolve only once playback has completed.
#[async_trait::async_trait]
pub trait SpeechOutput: Send + Sync {
    /// Speak the given text, resolving when playback finishes
    async fn speak(&self, text: &str, voice: &VoiceSettings) -> Result<()>;

    /// Cancel any in-progress or queued utterances
    async fn cancel_all(&self) -> Result<()>;

    /// Get output name for logging
    fn name(&self) -> &str;
}
