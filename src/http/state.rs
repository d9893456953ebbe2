use crate::session::DescriberSession;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single captioning session controlled by this process
    pub session: DescriberSession,
}

impl AppState {
    pub fn new(session: DescriberSession) -> Self {
        Self { session }
    }
}
