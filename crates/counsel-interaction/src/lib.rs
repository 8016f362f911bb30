//! Prediction client for Counsel.
//!
//! Turns a question plus a [`RequestMode`] into a POST against a prediction
//! endpoint and hands back either a [`Reply`] or a [`PredictionError`].
//! Nothing in this crate panics or propagates beyond that result.

pub mod error;
pub mod http_client;
pub mod request;
pub mod response;

use async_trait::async_trait;
use counsel_core::RequestMode;

pub use error::PredictionError;
pub use http_client::HttpPredictionClient;
pub use request::{OverrideConfig, PredictionRequest, build_request};
pub use response::{FALLBACK_REPLY, Reply, parse_reply};

/// Something that can answer a question at an endpoint.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(
        &self,
        endpoint: &str,
        question: &str,
        mode: &RequestMode,
    ) -> Result<Reply, PredictionError>;
}
