//! Failures of a single prediction call.

use thiserror::Error;

/// Everything that can go wrong between sending a question and holding a
/// reply. A success response without a reply field is not an error; see
/// [`crate::Reply::fallback`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// The endpoint could not be reached, or the call timed out.
    #[error("{detail}")]
    Transport { detail: String },

    /// The endpoint answered with a non-success status.
    #[error("{detail}")]
    Protocol { status: u16, detail: String },

    /// Anything else, e.g. a success body that is not JSON.
    #[error("{detail}")]
    Unexpected { detail: String },
}

impl PredictionError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn protocol(status: u16, detail: impl Into<String>) -> Self {
        Self::Protocol {
            status,
            detail: detail.into(),
        }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { detail } | Self::Protocol { detail, .. } | Self::Unexpected { detail } => {
                detail
            }
        }
    }

    /// Transport and protocol failures carry a detail worth showing; the rest
    /// are reported generically.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Protocol { .. })
    }
}
