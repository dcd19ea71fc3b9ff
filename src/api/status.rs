use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Message for the host's status display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusEvent {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Error)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Info)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Warning)
    }
}
