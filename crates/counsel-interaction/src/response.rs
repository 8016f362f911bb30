//! Reply extraction from a prediction response body.

use serde_json::Value;

use crate::error::PredictionError;

/// Shown when the endpoint answered successfully but without a reply.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that.";

/// Text reply of a prediction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// True when the body had no usable `text` field.
    pub is_fallback: bool,
}

impl Reply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            is_fallback: true,
        }
    }
}

/// Parses a success body.
///
/// A JSON body without a string `text` field yields [`Reply::fallback`]; a
/// body that is not JSON at all is an `Unexpected` error.
pub fn parse_reply(body: &str) -> Result<Reply, PredictionError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| PredictionError::unexpected(format!("invalid JSON in response: {err}")))?;

    Ok(value
        .get("text")
        .and_then(Value::as_str)
        .map(Reply::answer)
        .unwrap_or_else(Reply::fallback))
}
