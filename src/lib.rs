pub mod capture;
pub mod config;
pub mod describe;
pub mod error;
pub mod http;
pub mod session;
pub mod speech;

pub use capture::{CaptureBackend, CaptureBackendFactory, CaptureEvent, CaptureSource};
pub use config::Config;
pub use describe::{DescriptionBackend, DetailLevel, EventType, GeminiClient};
pub use error::{CaptureError, SessionError};
pub use http::{create_router, AppState};
pub use session::{
    DescriberSession, SessionConfig, SessionStats, Status, TranscriptItem, TranscriptKind,
};
pub use speech::{LogSpeaker, SpeechOutput, VoiceSettings};
