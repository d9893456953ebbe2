use super::config::SessionConfig;
use super::stats::SessionStats;
use super::status::Status;
use super::transcript::{TranscriptItem, TranscriptKind, TranscriptLog};
use crate::capture::{CaptureBackend, CaptureEvent};
use crate::describe::{is_no_description, DescriptionBackend, DetailLevel, EventType};
use crate::error::{CaptureError, SessionError};
use crate::speech::SpeechOutput;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

const PERMISSION_DENIED_MESSAGE: &str =
    "Speech recognition permission was denied. Please allow microphone access.";
const NO_MICROPHONE_MESSAGE: &str =
    "No microphone was found. Ensure a microphone is installed.";
const BACKEND_FAILED_MESSAGE: &str = "Failed to generate description.";

/// Mutable session state, guarded by a single mutex
///
/// Every timer slot is singular: scheduling a new timer of the same purpose
/// aborts the previous one, and `stop` aborts them all. Late completions
/// from spawned tasks re-check `epoch` and discard themselves when stale.
struct Inner {
    status: Status,
    active: bool,
    epoch: u64,
    started_at: Option<DateTime<Utc>>,
    transcript: TranscriptLog,
    pending_segment: String,
    analysis_in_flight: bool,
    event_type: EventType,
    detail_level: DetailLevel,
    debounce_timer: Option<JoinHandle<()>>,
    followup_timer: Option<JoinHandle<()>>,
    restart_timer: Option<JoinHandle<()>>,
    recovery_timer: Option<JoinHandle<()>>,
    capture_pump: Option<JoinHandle<()>>,
}

impl Inner {
    fn new() -> Self {
        Self {
            status: Status::Idle,
            active: false,
            epoch: 0,
            started_at: None,
            transcript: TranscriptLog::new(),
            pending_segment: String::new(),
            analysis_in_flight: false,
            event_type: EventType::default(),
            detail_level: DetailLevel::default(),
            debounce_timer: None,
            followup_timer: None,
            restart_timer: None,
            recovery_timer: None,
            capture_pump: None,
        }
    }

    fn abort_timers(&mut self) {
        for timer in [
            self.debounce_timer.take(),
            self.followup_timer.take(),
            self.restart_timer.take(),
            self.recovery_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            timer.abort();
        }
    }
}

/// Live captioning session orchestrator
///
/// Owns all session state and reconciles bursty recognition events with
/// debounced, serialized description requests and spoken playback. Cheap to
/// clone; spawned timer and pump tasks hold a clone and re-enter through
/// the shared state.
#[derive(Clone)]
pub struct DescriberSession {
    config: SessionConfig,
    capture: Arc<Mutex<Box<dyn CaptureBackend>>>,
    backend: Arc<dyn DescriptionBackend>,
    speech: Arc<dyn SpeechOutput>,
    inner: Arc<Mutex<Inner>>,
}

impl DescriberSession {
    pub fn new(
        config: SessionConfig,
        capture: Box<dyn CaptureBackend>,
        backend: Arc<dyn DescriptionBackend>,
        speech: Arc<dyn SpeechOutput>,
    ) -> Self {
        info!("Creating captioning session: {}", config.session_id);

        Self {
            config,
            capture: Arc::new(Mutex::new(capture)),
            backend,
            speech,
            inner: Arc::new(Mutex::new(Inner::new())),
        }
    }

    /// Start a session
    ///
    /// No-op if a session is already active. Clears the transcript and all
    /// buffers, then starts the recognition stream; a permission or device
    /// failure leaves the session in `Error` and returns the typed error.
    pub async fn start(&self) -> Result<(), SessionError> {
        let epoch = {
            let mut inner = self.inner.lock().await;
            if inner.active {
                warn!("Session already active, ignoring start");
                return Ok(());
            }

            inner.transcript.clear();
            inner.pending_segment.clear();
            inner.analysis_in_flight = false;
            inner.abort_timers();
            inner.active = true;
            inner.epoch += 1;
            inner.started_at = Some(Utc::now());
            inner.status = Status::Listening;
            inner.epoch
        };

        if let Err(err) = self.start_capture(epoch).await {
            let mut inner = self.inner.lock().await;
            inner.active = false;
            inner.status = Status::Error;
            let message = match err {
                SessionError::Permission => PERMISSION_DENIED_MESSAGE,
                SessionError::Device => NO_MICROPHONE_MESSAGE,
                _ => "Failed to start speech recognition.",
            };
            inner
                .transcript
                .push(TranscriptKind::Error, message.to_string());
            error!("Failed to start capture: {}", err);
            return Err(err);
        }

        info!("Session started: {}", self.config.session_id);
        Ok(())
    }

    /// Stop the session
    ///
    /// Cancels every pending timer, tears down the recognition stream
    /// (without letting its end-of-stream hook schedule a restart), stops
    /// speech output, and discards the pending segment buffer. Any
    /// in-flight backend call runs to completion but its result is
    /// discarded via the epoch guard.
    pub async fn stop(&self) -> Result<()> {
        {
            let mut inner = self.inner.lock().await;
            if !inner.active && inner.status == Status::Idle {
                warn!("Session not active, ignoring stop");
                return Ok(());
            }

            inner.active = false;
            inner.epoch += 1;
            inner.abort_timers();
            // Not aborted: stop can run inside the pump task (fatal capture
            // error path). The epoch bump disarms it, and it exits once the
            // capture backend closes its event channel below.
            inner.capture_pump.take();
            inner.pending_segment.clear();
            inner.analysis_in_flight = false;
            inner.transcript.clear_interim();
            inner.status = Status::Idle;
        }

        if let Err(e) = self.capture.lock().await.stop().await {
            warn!("Failed to stop capture backend: {}", e);
        }
        if let Err(e) = self.speech.cancel_all().await {
            warn!("Failed to cancel speech output: {}", e);
        }

        info!("Session stopped: {}", self.config.session_id);
        Ok(())
    }

    /// Set the event type; rejected while a session is active
    pub async fn set_event_type(&self, value: EventType) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().await;
        if inner.active {
            warn!("Ignoring event type change while session is active");
            return Err(SessionError::SessionActive);
        }
        inner.event_type = value;
        Ok(())
    }

    /// Set the detail level; rejected while a session is active
    pub async fn set_detail_level(&self, value: DetailLevel) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().await;
        if inner.active {
            warn!("Ignoring detail level change while session is active");
            return Err(SessionError::SessionActive);
        }
        inner.detail_level = value;
        Ok(())
    }

    /// Current lifecycle state
    pub async fn status(&self) -> Status {
        self.inner.lock().await.status
    }

    /// Read-only snapshot of the transcript log
    pub async fn transcript(&self) -> Vec<TranscriptItem> {
        self.inner.lock().await.transcript.snapshot()
    }

    /// Snapshot of session state for the control API
    pub async fn stats(&self) -> SessionStats {
        let inner = self.inner.lock().await;
        let duration_secs = inner
            .started_at
            .map(|t| Utc::now().signed_duration_since(t).num_milliseconds() as f64 / 1000.0)
            .unwrap_or(0.0);

        SessionStats {
            status: inner.status,
            active: inner.active,
            started_at: inner.started_at,
            duration_secs,
            transcript_items: inner.transcript.len(),
            event_type: inner.event_type,
            detail_level: inner.detail_level,
        }
    }

    /// Start (or restart) the recognition stream and spawn its event pump
    fn start_capture(
        &self,
        epoch: u64,
    ) -> Pin<Box<dyn Future<Output = Result<(), SessionError>> + Send + '_>> {
        Box::pin(async move {
        let events = {
            let mut capture = self.capture.lock().await;
            capture.start().await.map_err(SessionError::from)?
        };

        let session = self.clone();
        let pump = tokio::spawn(async move {
            session.pump_capture(epoch, events).await;
        });

        self.inner.lock().await.capture_pump = Some(pump);
        Ok(())
        })
    }

    /// Consume capture events until the stream ends
    async fn pump_capture(&self, epoch: u64, mut events: mpsc::Receiver<CaptureEvent>) {
        while let Some(event) = events.recv().await {
            match event {
                CaptureEvent::Interim(text) => self.on_interim(epoch, text).await,
                CaptureEvent::Final(text) => self.on_final(epoch, text).await,
                CaptureEvent::Error(err) => self.on_capture_error(epoch, err).await,
            }
        }

        self.on_capture_ended(epoch).await;
    }

    async fn on_interim(&self, epoch: u64, text: String) {
        let mut inner = self.inner.lock().await;
        if !inner.active || inner.epoch != epoch {
            return;
        }

        if text.trim().is_empty() {
            inner.transcript.clear_interim();
        } else {
            inner.transcript.set_interim(text);
        }
    }

    /// Finalized fragment: log it, accumulate it, and reschedule the
    /// debounce timer so analysis fires after a quiet period.
    async fn on_final(&self, epoch: u64, text: String) {
        let mut inner = self.inner.lock().await;
        if !inner.active || inner.epoch != epoch {
            return;
        }

        let fragment = text.trim().to_string();
        if fragment.is_empty() {
            return;
        }

        inner.transcript.clear_interim();
        inner
            .transcript
            .push(TranscriptKind::Transcript, fragment.clone());

        if !inner.pending_segment.is_empty() {
            inner.pending_segment.push(' ');
        }
        inner.pending_segment.push_str(&fragment);

        if let Some(timer) = inner.debounce_timer.take() {
            timer.abort();
        }
        let session = self.clone();
        let delay = self.config.debounce;
        inner.debounce_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.on_debounce(epoch).await;
        }));
    }

    /// Debounce fired: pop the whole buffer and analyze it, unless an
    /// analysis is already running (the buffer is then left for the
    /// follow-up check after that call completes).
    async fn on_debounce(&self, epoch: u64) {
        let segment = {
            let mut inner = self.inner.lock().await;
            if !inner.active || inner.epoch != epoch {
                return;
            }
            inner.debounce_timer = None;

            if inner.analysis_in_flight {
                debug!("Analysis in flight, keeping segment queued");
                return;
            }
            if inner.pending_segment.is_empty() {
                return;
            }
            std::mem::take(&mut inner.pending_segment)
        };

        let session = self.clone();
        tokio::spawn(async move {
            session.analyze(epoch, segment).await;
        });
    }

    /// Send a segment to the description backend
    ///
    /// Guarded by the in-flight flag so at most one backend call runs at a
    /// time; a segment arriving while one is running is dropped here (the
    /// debounce/follow-up paths never let that happen, the guard protects
    /// against races).
    fn analyze(
        &self,
        epoch: u64,
        segment: String,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
        let trimmed = segment.trim();
        if trimmed.chars().count() < self.config.min_segment_chars {
            debug!("Discarding segment too short to describe: {:?}", trimmed);
            return;
        }
        let segment = trimmed.to_string();

        let (event_type, detail_level) = {
            let mut inner = self.inner.lock().await;
            if !inner.active || inner.epoch != epoch {
                return;
            }
            if inner.analysis_in_flight {
                warn!("Analysis already in flight, dropping segment");
                return;
            }
            inner.analysis_in_flight = true;
            inner.status = Status::Analyzing;
            (inner.event_type, inner.detail_level)
        };

        info!("Analyzing segment ({} chars)", segment.len());

        let result = self
            .backend
            .generate_description(&segment, event_type, detail_level)
            .await;

        self.on_analysis_complete(epoch, result).await;
        })
    }

    async fn on_analysis_complete(&self, epoch: u64, result: Result<String>) {
        match result {
            Ok(text) if is_no_description(&text) || text.trim().is_empty() => {
                let mut inner = self.inner.lock().await;
                if inner.epoch != epoch {
                    debug!("Discarding stale analysis result");
                    return;
                }
                inner.analysis_in_flight = false;
                if inner.active {
                    inner.status = Status::Listening;
                }
            }
            Ok(text) => {
                let description = text.trim().to_string();
                {
                    let mut inner = self.inner.lock().await;
                    if inner.epoch != epoch {
                        debug!("Discarding stale analysis result");
                        return;
                    }
                    inner
                        .transcript
                        .push(TranscriptKind::Description, description.clone());
                    inner.status = Status::Speaking;
                }

                if let Err(e) = self.speech.speak(&description, &self.config.voice).await {
                    warn!("Speech output failed: {}", e);
                }

                let mut inner = self.inner.lock().await;
                if inner.epoch != epoch {
                    return;
                }
                inner.analysis_in_flight = false;
                inner.status = if inner.active {
                    Status::Listening
                } else {
                    Status::Idle
                };
            }
            Err(e) => {
                let mut inner = self.inner.lock().await;
                if inner.epoch != epoch {
                    debug!("Discarding stale analysis failure");
                    return;
                }
                error!("Description request failed: {:#}", e);
                inner
                    .transcript
                    .push(TranscriptKind::Error, BACKEND_FAILED_MESSAGE.to_string());
                inner.status = Status::Error;
                inner.analysis_in_flight = false;

                // Recoverable: resume listening after a fixed cooldown.
                if let Some(timer) = inner.recovery_timer.take() {
                    timer.abort();
                }
                let session = self.clone();
                let cooldown = self.config.error_cooldown;
                inner.recovery_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(cooldown).await;
                    session.on_recovery(epoch).await;
                }));
            }
        }

        self.schedule_followup(epoch).await;
    }

    async fn on_recovery(&self, epoch: u64) {
        let mut inner = self.inner.lock().await;
        if !inner.active || inner.epoch != epoch {
            return;
        }
        inner.recovery_timer = None;
        if inner.status == Status::Error {
            inner.status = Status::Listening;
        }
    }

    /// If text accumulated while an analysis was running, pick it up after
    /// a short delay so freshly spoken content is not starved.
    async fn schedule_followup(&self, epoch: u64) {
        let mut inner = self.inner.lock().await;
        if !inner.active || inner.epoch != epoch {
            return;
        }
        if inner.analysis_in_flight || inner.pending_segment.trim().is_empty() {
            return;
        }

        if let Some(timer) = inner.followup_timer.take() {
            timer.abort();
        }
        let session = self.clone();
        let delay = self.config.followup_delay;
        inner.followup_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.on_followup(epoch).await;
        }));
    }

    async fn on_followup(&self, epoch: u64) {
        let segment = {
            let mut inner = self.inner.lock().await;
            if !inner.active || inner.epoch != epoch {
                return;
            }
            inner.followup_timer = None;

            if inner.analysis_in_flight || inner.pending_segment.is_empty() {
                return;
            }
            std::mem::take(&mut inner.pending_segment)
        };

        let session = self.clone();
        tokio::spawn(async move {
            session.analyze(epoch, segment).await;
        });
    }

    async fn on_capture_error(&self, epoch: u64, err: CaptureError) {
        match err {
            CaptureError::PermissionDenied | CaptureError::NoMicrophone => {
                {
                    let mut inner = self.inner.lock().await;
                    if !inner.active || inner.epoch != epoch {
                        return;
                    }
                    let message = if err == CaptureError::PermissionDenied {
                        PERMISSION_DENIED_MESSAGE
                    } else {
                        NO_MICROPHONE_MESSAGE
                    };
                    inner
                        .transcript
                        .push(TranscriptKind::Error, message.to_string());
                    error!("Fatal capture error: {}", err);
                }
                // Unrecoverable for this session instance.
                if let Err(e) = self.stop().await {
                    warn!("Failed to stop session after capture error: {}", e);
                }
            }
            CaptureError::Transient(msg) => {
                warn!("Recognition error (ignored): {}", msg);
            }
        }
    }

    /// The recognition stream ended on its own; restart it after a delay
    /// unless the session has been stopped in the meantime.
    async fn on_capture_ended(&self, epoch: u64) {
        let mut inner = self.inner.lock().await;
        if !inner.active || inner.epoch != epoch {
            debug!("Capture ended after stop, not restarting");
            return;
        }

        info!(
            "Recognition stream ended, restarting in {:?}",
            self.config.restart_delay
        );

        if let Some(timer) = inner.restart_timer.take() {
            timer.abort();
        }
        let session = self.clone();
        let delay = self.config.restart_delay;
        inner.restart_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.on_restart(epoch).await;
        }));
    }

    async fn on_restart(&self, epoch: u64) {
        {
            let mut inner = self.inner.lock().await;
            if !inner.active || inner.epoch != epoch {
                return;
            }
            inner.restart_timer = None;
        }

        if let Err(err) = self.start_capture(epoch).await {
            {
                let mut inner = self.inner.lock().await;
                if !inner.active || inner.epoch != epoch {
                    return;
                }
                inner
                    .transcript
                    .push(TranscriptKind::Error, NO_MICROPHONE_MESSAGE.to_string());
                error!("Failed to restart capture: {}", err);
            }
            if let Err(e) = self.stop().await {
                warn!("Failed to stop session after restart failure: {}", e);
            }
        }
    }
}
