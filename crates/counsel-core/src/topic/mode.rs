//! Request augmentation modes.

use serde::{Deserialize, Serialize};

/// The static augmentation shape of a topic, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicMode {
    Plain,
    ResumeAugmented,
    ProfileAugmented,
}

/// A request's augmentation together with its payload.
///
/// Built by the topic controller right before each prediction call and
/// consumed by the request builder; the payload is what ends up in the
/// override field of the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    Plain,
    ResumeAugmented(String),
    ProfileAugmented(String),
}

impl RequestMode {
    pub fn topic_mode(&self) -> TopicMode {
        match self {
            Self::Plain => TopicMode::Plain,
            Self::ResumeAugmented(_) => TopicMode::ResumeAugmented,
            Self::ProfileAugmented(_) => TopicMode::ProfileAugmented,
        }
    }

    /// The override payload, if this mode carries one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Plain => None,
            Self::ResumeAugmented(text) | Self::ProfileAugmented(text) => Some(text),
        }
    }
}
