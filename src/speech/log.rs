use super::output::{SpeechOutput, VoiceSettings};
use anyhow::Result;
use tracing::{debug, info};

/// Speech output that logs descriptions instead of playing audio.
///
/// Used for headless runs where no audio device is available; a real TTS
/// engine plugs in behind the same trait.
pub struct LogSpeaker;

impl LogSpeaker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SpeechOutput for LogSpeaker {
    async fn speak(&self, text: &str, voice: &VoiceSettings) -> Result<()> {
        info!(rate = voice.rate, pitch = voice.pitch, "description: {}", text);
        Ok(())
    }

    async fn cancel_all(&self) -> Result<()> {
        debug!("cancel_all (nothing to cancel)");
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
