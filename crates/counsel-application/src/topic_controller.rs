//! Topic controller.
//!
//! Drives one topic end to end: picks the request mode for the topic, calls
//! the prediction service, and records the exchange in the session. This is
//! also the single place where a failed prediction becomes transcript text.

use counsel_core::{
    CounselError, EndpointsConfig, RequestMode, Session, TopicKind, TopicMode, TopicState, Turn,
    aggregate,
};
use counsel_interaction::{PredictionError, PredictionService, Reply};
use std::sync::Arc;

/// Reply recorded for topics that have no endpoint configured.
pub const NOT_IMPLEMENTED_REPLY: &str = "This chatbot is not yet implemented for this section.";

/// Reply recorded for failures that carry no useful detail.
pub const UNEXPECTED_ERROR_REPLY: &str = "An unexpected error occurred.";

/// Renders a prediction outcome as assistant text.
///
/// Transport and protocol failures read `"An error occurred: {detail}"`,
/// anything else reads [`UNEXPECTED_ERROR_REPLY`]. The transcript does not
/// distinguish these from real answers.
pub fn render_reply(result: Result<Reply, PredictionError>) -> String {
    match result {
        Ok(reply) => reply.text,
        Err(err) if err.is_reportable() => format!("An error occurred: {}", err.detail()),
        Err(_) => UNEXPECTED_ERROR_REPLY.to_string(),
    }
}

/// Outcome of attaching a resume to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    /// A previously attached resume was replaced.
    pub replaced: bool,
    /// Assistant reply to the automatic first turn, when this attachment
    /// seeded the resume topic.
    pub seed_reply: Option<Turn>,
}

/// Result of the finish action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishNotice {
    pub state: TopicState,
    pub message: String,
}

pub struct TopicController {
    prediction: Arc<dyn PredictionService>,
    endpoints: EndpointsConfig,
}

impl TopicController {
    pub fn new(prediction: Arc<dyn PredictionService>, endpoints: EndpointsConfig) -> Self {
        Self {
            prediction,
            endpoints,
        }
    }

    /// Submits one user turn to a topic and records the exchange.
    ///
    /// Returns the assistant turn that was appended. Fails without touching
    /// the session when the input is blank or the topic's mode cannot be
    /// satisfied yet (no resume attached, no profile to advise on).
    pub async fn submit(
        &self,
        session: &mut Session,
        kind: TopicKind,
        text: &str,
    ) -> Result<Turn, CounselError> {
        if text.trim().is_empty() {
            return Err(CounselError::EmptyInput);
        }

        let mode = request_mode(session, kind)?;
        let previous_state = session.state(kind);

        let reply = self.ask(kind, text, &mode).await;
        let topic = session.topic_mut(kind);
        topic.record_exchange(text, reply.clone());

        tracing::debug!(
            topic = kind.slug(),
            from = ?previous_state,
            to = ?topic.state(),
            turns = topic.transcript().len(),
            "Recorded exchange"
        );

        Ok(Turn::assistant(reply))
    }

    /// Stores the resume text and, the first time only, seeds the resume
    /// topic with it as an ordinary user turn.
    pub async fn attach_resume(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<ResumeAttachment, CounselError> {
        if text.trim().is_empty() {
            return Err(CounselError::extraction("The resume contains no text"));
        }

        let replaced = session.set_resume_text(text).is_some();
        let topic = session.topic_mut(TopicKind::ResumeReview);
        if topic.is_seeded() {
            tracing::debug!(replaced, "Resume updated; topic already seeded");
            return Ok(ResumeAttachment {
                replaced,
                seed_reply: None,
            });
        }

        topic.mark_seeded();
        tracing::debug!("Seeding resume topic with extracted text");
        let seed_reply = self.submit(session, TopicKind::ResumeReview, text).await?;

        Ok(ResumeAttachment {
            replaced,
            seed_reply: Some(seed_reply),
        })
    }

    /// Empties a topic's transcript and contribution.
    pub fn clear(&self, session: &mut Session, kind: TopicKind) {
        session.topic_mut(kind).clear();
        tracing::debug!(topic = kind.slug(), "Cleared topic");
    }

    /// Marks a topic finished. Advisory only; the topic keeps accepting turns.
    pub fn finish(&self, session: &mut Session, kind: TopicKind) -> FinishNotice {
        let state = session.topic_mut(kind).mark_finished();
        tracing::debug!(topic = kind.slug(), ?state, "Finish requested");

        FinishNotice {
            state,
            message: format!(
                "Conversation for {} finished. You can now move to the next section.",
                kind.title()
            ),
        }
    }

    /// Sends the question, or answers locally when no endpoint is configured.
    async fn ask(&self, kind: TopicKind, question: &str, mode: &RequestMode) -> String {
        let Some(endpoint) = self.endpoints.for_topic(kind) else {
            tracing::debug!(topic = kind.slug(), "No endpoint configured");
            return NOT_IMPLEMENTED_REPLY.to_string();
        };

        let result = self.prediction.predict(endpoint, question, mode).await;
        if let Err(err) = &result {
            tracing::warn!(topic = kind.slug(), "Prediction failed, recording as reply: {}", err);
        }
        render_reply(result)
    }
}

/// Builds the request mode for the next call on `kind`.
pub fn request_mode(session: &Session, kind: TopicKind) -> Result<RequestMode, CounselError> {
    match kind.mode() {
        TopicMode::Plain => Ok(RequestMode::Plain),
        TopicMode::ResumeAugmented => session
            .resume_text()
            .map(|text| RequestMode::ResumeAugmented(text.to_string()))
            .ok_or(CounselError::ResumeRequired),
        TopicMode::ProfileAugmented => {
            let profile = aggregate(session);
            if profile.is_empty() {
                Err(CounselError::InsufficientProfile)
            } else {
                Ok(RequestMode::ProfileAugmented(profile))
            }
        }
    }
}
