pub mod backend;
pub mod lines;

pub use backend::{CaptureBackend, CaptureBackendFactory, CaptureEvent, CaptureSource};
pub use lines::StdinCapture;
