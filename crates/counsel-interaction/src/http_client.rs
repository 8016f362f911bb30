//! HttpPredictionClient - REST implementation of [`PredictionService`].
//!
//! One POST per question, JSON in and JSON out, a single attempt bounded by
//! the configured timeouts.

use async_trait::async_trait;
use counsel_core::{CounselError, PredictionConfig, RequestMode};
use reqwest::Client;
use std::time::Duration;

use crate::PredictionService;
use crate::error::PredictionError;
use crate::request::build_request;
use crate::response::{Reply, parse_reply};

/// Prediction client that talks to the endpoint over HTTP.
#[derive(Clone)]
pub struct HttpPredictionClient {
    client: Client,
    timeout: Duration,
}

impl HttpPredictionClient {
    /// Builds a client with the request and connect timeouts from `config`.
    pub fn new(config: &PredictionConfig) -> Result<Self, CounselError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|err| CounselError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> PredictionError {
        if err.is_timeout() {
            PredictionError::transport(format!(
                "request timed out after {}s ({err})",
                self.timeout.as_secs()
            ))
        } else {
            PredictionError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(
        &self,
        endpoint: &str,
        question: &str,
        mode: &RequestMode,
    ) -> Result<Reply, PredictionError> {
        let body = build_request(question, mode);

        tracing::info!(
            target: "counsel::prediction",
            endpoint,
            mode = ?mode.topic_mode(),
            question_len = question.len(),
            has_override = body.override_config.is_some(),
            "Sending prediction request"
        );
        tracing::debug!(target: "counsel::prediction", payload = ?body, "Request payload");

        let response = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                let err = self.transport_error(err);
                tracing::error!(target: "counsel::prediction", endpoint, "Error in API request: {}", err);
                err
            })?;

        let status = response.status();
        if let Err(err) = response.error_for_status_ref() {
            tracing::error!(
                target: "counsel::prediction",
                endpoint,
                status = status.as_u16(),
                "Prediction endpoint returned an error status"
            );
            return Err(PredictionError::protocol(status.as_u16(), err.to_string()));
        }

        let text = response.text().await.map_err(|err| {
            let err = self.transport_error(err);
            tracing::error!(target: "counsel::prediction", endpoint, "Failed to read response body: {}", err);
            err
        })?;

        let reply = parse_reply(&text).inspect_err(|err| {
            tracing::error!(target: "counsel::prediction", endpoint, "Unexpected error: {}", err);
        })?;

        tracing::info!(
            target: "counsel::prediction",
            status = status.as_u16(),
            reply_len = reply.text.len(),
            fallback = reply.is_fallback,
            "Received prediction response"
        );

        Ok(reply)
    }
}
