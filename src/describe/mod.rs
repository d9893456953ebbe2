//! Visual description generation
//!
//! The `DescriptionBackend` trait turns a finalized transcript segment into
//! an optional one-sentence visual description. `GeminiClient` is the
//! production implementation; it answers with the literal word "NONE" when
//! the segment does not warrant a description.

pub mod backend;
pub mod gemini;
pub mod messages;
pub mod prompt;

pub use backend::{is_no_description, DescriptionBackend, DetailLevel, EventType, NO_DESCRIPTION};
pub use gemini::GeminiClient;
