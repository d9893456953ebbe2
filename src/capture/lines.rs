use super::backend::{CaptureBackend, CaptureEvent};
use crate::error::CaptureError;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Capture backend that reads lines from stdin and emits each non-empty
/// line as a final fragment. Useful for headless runs and piping captions
/// from another process.
pub struct StdinCapture {
    reader_task: Option<JoinHandle<()>>,
    capturing: bool,
}

impl StdinCapture {
    pub fn new() -> Self {
        Self {
            reader_task: None,
            capturing: false,
        }
    }
}

impl Default for StdinCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CaptureBackend for StdinCapture {
    async fn start(&mut self) -> Result<mpsc::Receiver<CaptureEvent>, CaptureError> {
        let (tx, rx) = mpsc::channel(64);

        let task = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            while let Ok(Some(line)) = lines.next_line().await {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if tx.send(CaptureEvent::Final(trimmed.to_string())).await.is_err() {
                    // Receiver dropped; the session is gone.
                    break;
                }
            }

            debug!("stdin capture reader finished");
            // tx drops here, closing the event channel (end-of-stream).
        });

        self.reader_task = Some(task);
        self.capturing = true;

        info!("stdin capture started");
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(task) = self.reader_task.take() {
            task.abort();
        }
        self.capturing = false;
        info!("stdin capture stopped");
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn name(&self) -> &str {
        "stdin"
    }
}
