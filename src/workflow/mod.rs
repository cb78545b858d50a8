//! The three client-side flows: voter registration, vote casting, and
//! results display. Each owns its state exclusively and reports to its
//! renderer through [`Notice`] values; errors never cross a workflow
//! boundary and never take a view down.

pub mod registration;
pub mod results;
pub mod voting;

pub use registration::{RegistrationFlow, RegistrationForm};
pub use results::ResultsFlow;
pub use voting::{Phase, VotingFlow};

use std::fmt::{Display, Formatter};

/// What a workflow hands to whatever renders it: a success or error kind
/// plus the text to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "{}", self.text),
            NoticeKind::Error => write!(f, "error: {}", self.text),
        }
    }
}
