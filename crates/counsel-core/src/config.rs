use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::topic::TopicKind;

pub const DEFAULT_STRENGTHS_ENDPOINT: &str =
    "https://finflowise.onrender.com/api/v1/prediction/0113af8b-95c9-438f-b3fd-6db650058e9c";
pub const DEFAULT_ACADEMIC_ENDPOINT: &str =
    "https://finflowise.onrender.com/api/v1/prediction/7f1cc35a-bc96-4f85-a1f4-f8fceaca63f1";
pub const DEFAULT_RESUME_ENDPOINT: &str =
    "https://finflowise.onrender.com/api/v1/prediction/0d1787e4-e1f3-422c-9425-9a52a15f0b9f";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CounselConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

/// Prediction endpoint per topic. A topic without an endpoint (or with a
/// blank one) answers with a fixed "not yet implemented" reply.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EndpointsConfig {
    #[serde(default = "default_strengths")]
    pub strengths: Option<String>,
    #[serde(default = "default_resume")]
    pub resume: Option<String>,
    #[serde(default = "default_academic")]
    pub academic: Option<String>,
    #[serde(default)]
    pub advice: Option<String>,
}

fn default_strengths() -> Option<String> {
    Some(DEFAULT_STRENGTHS_ENDPOINT.to_string())
}

fn default_resume() -> Option<String> {
    Some(DEFAULT_RESUME_ENDPOINT.to_string())
}

fn default_academic() -> Option<String> {
    Some(DEFAULT_ACADEMIC_ENDPOINT.to_string())
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            strengths: default_strengths(),
            resume: default_resume(),
            academic: default_academic(),
            advice: None,
        }
    }
}

impl EndpointsConfig {
    /// All topics unconfigured.
    pub fn none() -> Self {
        Self {
            strengths: None,
            resume: None,
            academic: None,
            advice: None,
        }
    }

    pub fn for_topic(&self, kind: TopicKind) -> Option<&str> {
        let endpoint = match kind {
            TopicKind::StrengthsWeaknesses => &self.strengths,
            TopicKind::ResumeReview => &self.resume,
            TopicKind::AcademicBackground => &self.academic,
            TopicKind::CareerAdvice => &self.advice,
        };
        endpoint.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn set(&mut self, kind: TopicKind, endpoint: Option<String>) {
        let slot = match kind {
            TopicKind::StrengthsWeaknesses => &mut self.strengths,
            TopicKind::ResumeReview => &mut self.resume,
            TopicKind::AcademicBackground => &mut self.academic,
            TopicKind::CareerAdvice => &mut self.advice,
        };
        *slot = endpoint;
    }
}

/// HTTP behavior of the prediction client. One attempt per request, no retry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PredictionConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl PredictionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: CounselConfig = toml::from_str("").unwrap();
        assert_eq!(config, CounselConfig::default());
        assert_eq!(
            config.endpoints.for_topic(TopicKind::StrengthsWeaknesses),
            Some(DEFAULT_STRENGTHS_ENDPOINT)
        );
        assert_eq!(config.endpoints.for_topic(TopicKind::CareerAdvice), None);
        assert_eq!(config.prediction.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_sections() {
        let config: CounselConfig = toml::from_str(
            r#"
            [endpoints]
            advice = "http://localhost:3000/api/v1/prediction/advice"
            academic = ""

            [prediction]
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(
            config.endpoints.for_topic(TopicKind::CareerAdvice),
            Some("http://localhost:3000/api/v1/prediction/advice")
        );
        assert_eq!(
            config.endpoints.for_topic(TopicKind::StrengthsWeaknesses),
            Some(DEFAULT_STRENGTHS_ENDPOINT)
        );
        assert_eq!(config.endpoints.for_topic(TopicKind::AcademicBackground), None);
        assert_eq!(config.prediction.timeout_secs, 5);
        assert_eq!(config.prediction.connect_timeout_secs, 10);
    }

    #[test]
    fn test_blank_endpoint_counts_as_unconfigured() {
        let mut endpoints = EndpointsConfig::none();
        endpoints.set(TopicKind::AcademicBackground, Some("  ".to_string()));
        assert_eq!(endpoints.for_topic(TopicKind::AcademicBackground), None);
    }
}
