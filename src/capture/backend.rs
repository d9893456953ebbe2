use crate::error::CaptureError;
use anyhow::Result;
use tokio::sync::mpsc;

/// Event emitted by a running recognition stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Provisional fragment, subject to revision until the next final
    Interim(String),
    /// Finalized fragment of transcribed speech
    Final(String),
    /// Recognition error; fatal kinds end the session, transient kinds are logged
    Error(CaptureError),
}

/// Continuous speech capture backend trait
///
/// Implementations keep producing fragments until explicitly stopped or the
/// underlying stream ends on its own (platform-dependent). End-of-stream is
/// signalled by closing the event channel. Restart policy belongs to the
/// session orchestrator, not the backend: `start` may be called again after
/// the previous stream has ended.
#[async_trait::async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Start a recognition stream
    ///
    /// Returns a channel receiver that will receive capture events.
    async fn start(&mut self) -> Result<mpsc::Receiver<CaptureEvent>, CaptureError>;

    /// Stop the stream and release the underlying resource
    async fn stop(&mut self) -> Result<()>;

    /// Check if the backend is currently capturing
    fn is_capturing(&self) -> bool;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Capture source type
#[derive(Debug, Clone)]
pub enum CaptureSource {
    /// Line-oriented text input (each line is a final fragment)
    Stdin,
    /// Platform microphone + speech recognition
    Microphone,
}

/// Capture backend factory
pub struct CaptureBackendFactory;

impl CaptureBackendFactory {
    /// Create a capture backend for the given source
    pub fn create(source: CaptureSource) -> Result<Box<dyn CaptureBackend>> {
        match source {
            CaptureSource::Stdin => {
                use super::lines::StdinCapture;
                Ok(Box::new(StdinCapture::new()))
            }

            CaptureSource::Microphone => {
                anyhow::bail!("microphone capture backend is not yet supported")
            }
        }
    }
}
