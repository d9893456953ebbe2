use thiserror::Error;

/// Errors reported by a capture backend, either when starting the stream
/// or as events while it is running.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// Microphone permission was denied by the platform
    #[error("microphone access denied")]
    PermissionDenied,

    /// No usable microphone device was found
    #[error("no microphone found")]
    NoMicrophone,

    /// Recognition hiccup that does not end the session (network blip,
    /// no-speech timeout, etc.)
    #[error("transient recognition error: {0}")]
    Transient(String),
}

/// Session-level error taxonomy surfaced to callers of the orchestrator.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Microphone permission denied; fatal for this session
    #[error("microphone access denied")]
    Permission,

    /// No microphone available; fatal for this session
    #[error("no microphone found")]
    Device,

    /// Configuration changes are rejected while a session is running
    #[error("a session is active; stop it before changing configuration")]
    SessionActive,

    /// Missing or invalid configuration (e.g. backend credential)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Capture backend failed for a reason other than permission/device
    #[error("capture failed: {0}")]
    Capture(String),
}

impl From<CaptureError> for SessionError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::PermissionDenied => SessionError::Permission,
            CaptureError::NoMicrophone => SessionError::Device,
            CaptureError::Transient(msg) => SessionError::Capture(msg),
        }
    }
}
