pub mod log;
pub mod output;

pub use log::LogSpeaker;
pub use output::{SpeechOutput, VoiceSettings};
