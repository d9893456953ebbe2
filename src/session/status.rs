use serde::{Deserialize, Serialize};
use std::fmt;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Listening,
    Analyzing,
    Speaking,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Idle => "idle",
            Status::Listening => "listening",
            Status::Analyzing => "analyzing",
            Status::Speaking => "speaking",
            Status::Error => "error",
        };
        write!(f, "{}", label)
    }
}
