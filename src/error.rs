use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a workflow and a backend service.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a usable response.
    #[error("Service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-2xx status. The message is the
    /// `message`/`error` field of the JSON error body when one was sent,
    /// else a generic fallback.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    /// Client-side validation failed; no request was made.
    #[error("{0}")]
    Invalid(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Whether a rejection looks like the registry's unique-CIN index firing.
    ///
    /// This matches substrings of the backend's current wording. If that
    /// wording changes the check silently falls through to the generic
    /// message; the backends offer no structured error code to test instead.
    pub fn is_duplicate_cin(&self) -> bool {
        match self {
            Self::Rejected { message, .. } => {
                message.contains("Unique index") || message.contains("constraint")
            }
            _ => false,
        }
    }
}
