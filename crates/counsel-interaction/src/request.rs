//! Wire format of a prediction request.

use counsel_core::RequestMode;
use serde::Serialize;

/// Body POSTed to a prediction endpoint.
///
/// Serializes to `{"question": ...}` or
/// `{"question": ..., "overrideConfig": {<key>: ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub question: String,
    #[serde(rename = "overrideConfig", skip_serializing_if = "Option::is_none")]
    pub override_config: Option<OverrideConfig>,
}

/// The structured side channel. The variant picks the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OverrideConfig {
    /// `{"text": <resume text>}`
    DocumentText { text: String },
    /// `{"profile": <composite profile>}`
    Profile { profile: String },
}

/// Builds the request body for a question under the given mode.
pub fn build_request(question: &str, mode: &RequestMode) -> PredictionRequest {
    let override_config = match mode {
        RequestMode::Plain => None,
        RequestMode::ResumeAugmented(text) => Some(OverrideConfig::DocumentText { text: text.clone() }),
        RequestMode::ProfileAugmented(profile) => Some(OverrideConfig::Profile {
            profile: profile.clone(),
        }),
    };

    PredictionRequest {
        question: question.to_string(),
        override_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_request_has_no_override() {
        let body = serde_json::to_value(build_request("Hi", &RequestMode::Plain)).unwrap();
        assert_eq!(body, json!({ "question": "Hi" }));
    }

    #[test]
    fn test_resume_request_uses_text_key() {
        let mode = RequestMode::ResumeAugmented("Jane Doe\nRust developer".to_string());
        let body = serde_json::to_value(build_request("Review it", &mode)).unwrap();
        assert_eq!(
            body,
            json!({
                "question": "Review it",
                "overrideConfig": { "text": "Jane Doe\nRust developer" }
            })
        );
    }

    #[test]
    fn test_profile_request_uses_profile_key() {
        let mode = RequestMode::ProfileAugmented("Academic Background:\nUser: a\nAI: b".to_string());
        let body = serde_json::to_value(build_request("Advise me", &mode)).unwrap();
        assert_eq!(
            body["overrideConfig"],
            json!({ "profile": "Academic Background:\nUser: a\nAI: b" })
        );
        assert!(body["overrideConfig"].get("text").is_none());
    }
}
