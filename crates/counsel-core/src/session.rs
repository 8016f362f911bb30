//! Session domain model.
//!
//! A `Session` exclusively owns every topic touched during one interactive
//! run. It is an ordinary value passed by reference to each controller
//! operation; nothing in the workspace keeps a process-wide session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::topic::{Topic, TopicKind, TopicState, Turn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Topics created so far, keyed by kind. Ordered by declaration.
    topics: BTreeMap<TopicKind, Topic>,
    /// Text extracted from the attached resume, if any
    resume_text: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            topics: BTreeMap::new(),
            resume_text: None,
        }
    }

    /// Returns the topic if it has been created.
    pub fn topic(&self, kind: TopicKind) -> Option<&Topic> {
        self.topics.get(&kind)
    }

    /// Returns the topic, creating it on first interaction.
    pub fn topic_mut(&mut self, kind: TopicKind) -> &mut Topic {
        self.topics.entry(kind).or_insert_with(|| Topic::new(kind))
    }

    /// Transcript of a topic; empty for topics never entered.
    pub fn transcript(&self, kind: TopicKind) -> &[Turn] {
        self.topic(kind).map(Topic::transcript).unwrap_or_default()
    }

    pub fn contribution(&self, kind: TopicKind) -> &str {
        self.topic(kind).map(Topic::contribution).unwrap_or_default()
    }

    pub fn state(&self, kind: TopicKind) -> TopicState {
        self.topic(kind).map(Topic::state).unwrap_or(TopicState::Empty)
    }

    /// Topics created so far, in declared order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref()
    }

    /// Stores the resume text and returns the previous one.
    pub fn set_resume_text(&mut self, text: impl Into<String>) -> Option<String> {
        self.resume_text.replace(text.into())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_are_created_lazily() {
        let mut session = Session::new();
        assert!(session.topic(TopicKind::ResumeReview).is_none());
        assert!(session.transcript(TopicKind::ResumeReview).is_empty());
        assert_eq!(session.state(TopicKind::ResumeReview), TopicState::Empty);

        session.topic_mut(TopicKind::ResumeReview);
        assert!(session.topic(TopicKind::ResumeReview).is_some());
        assert_eq!(session.topics().count(), 1);
    }

    #[test]
    fn test_topics_iterate_in_declared_order() {
        let mut session = Session::new();
        session.topic_mut(TopicKind::CareerAdvice);
        session.topic_mut(TopicKind::StrengthsWeaknesses);
        session.topic_mut(TopicKind::AcademicBackground);

        let kinds: Vec<_> = session.topics().map(Topic::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TopicKind::StrengthsWeaknesses,
                TopicKind::AcademicBackground,
                TopicKind::CareerAdvice
            ]
        );
    }

    #[test]
    fn test_resume_text_replacement() {
        let mut session = Session::new();
        assert_eq!(session.set_resume_text("v1"), None);
        assert_eq!(session.set_resume_text("v2"), Some("v1".to_string()));
        assert_eq!(session.resume_text(), Some("v2"));
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id, Session::new().id);
    }
}
