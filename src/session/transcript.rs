use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a transcript log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptKind {
    /// Finalized speech-recognition text
    Transcript,
    /// Provisional recognition text, replaced in place as it updates
    Interim,
    /// Spoken visual description produced by the backend
    Description,
    /// Inline error entry
    Error,
}

/// A single entry in the session transcript log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptItem {
    pub kind: TranscriptKind,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptItem {
    pub fn new(kind: TranscriptKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered transcript log, append-only except for a single interim entry
/// that is upserted in place while recognition is still revising it.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    items: Vec<TranscriptItem>,
    interim: Option<usize>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-interim entry
    pub fn push(&mut self, kind: TranscriptKind, text: impl Into<String>) {
        debug_assert!(kind != TranscriptKind::Interim);
        self.items.push(TranscriptItem::new(kind, text));
    }

    /// Create or replace the single interim entry
    pub fn set_interim(&mut self, text: impl Into<String>) {
        match self.interim {
            Some(idx) => {
                self.items[idx].text = text.into();
                self.items[idx].timestamp = Utc::now();
            }
            None => {
                self.items
                    .push(TranscriptItem::new(TranscriptKind::Interim, text));
                self.interim = Some(self.items.len() - 1);
            }
        }
    }

    /// Remove the interim entry, if present
    pub fn clear_interim(&mut self) {
        if let Some(idx) = self.interim.take() {
            self.items.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.interim = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    /// Read-only snapshot for the presentation layer
    pub fn snapshot(&self) -> Vec<TranscriptItem> {
        self.items.clone()
    }
}
