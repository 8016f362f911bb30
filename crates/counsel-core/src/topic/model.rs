//! Topic domain model.

use serde::{Deserialize, Serialize};

use super::kind::TopicKind;
use super::message::Turn;

/// Lifecycle of a topic as seen by the surface.
///
/// `Finished` is advisory only: a finished topic still accepts turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicState {
    Empty,
    Active,
    Finished,
}

/// One guided conversation thread and its derived contribution.
///
/// `contribution` is always the `"User: {u}\nAI: {a}"` rendering of every
/// exchange in `transcript`, pairs joined by a newline. It is only touched by
/// [`Topic::record_exchange`] and [`Topic::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    kind: TopicKind,
    transcript: Vec<Turn>,
    contribution: String,
    finished: bool,
    /// Set once the topic received its automatic first turn. Survives clear.
    seeded: bool,
}

impl Topic {
    pub fn new(kind: TopicKind) -> Self {
        Self {
            kind,
            transcript: Vec::new(),
            contribution: String::new(),
            finished: false,
            seeded: false,
        }
    }

    pub fn kind(&self) -> TopicKind {
        self.kind
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn contribution(&self) -> &str {
        &self.contribution
    }

    pub fn state(&self) -> TopicState {
        if self.transcript.is_empty() {
            TopicState::Empty
        } else if self.finished {
            TopicState::Finished
        } else {
            TopicState::Active
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn mark_seeded(&mut self) {
        self.seeded = true;
    }

    /// Appends a user turn followed by its assistant turn and folds the pair
    /// into the contribution.
    pub fn record_exchange(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        let question = question.into();
        let reply = reply.into();

        if !self.contribution.is_empty() {
            self.contribution.push('\n');
        }
        self.contribution
            .push_str(&format!("User: {question}\nAI: {reply}"));

        self.transcript.push(Turn::user(question));
        self.transcript.push(Turn::assistant(reply));
    }

    /// Empties the transcript and contribution and returns to `Empty`.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.contribution.clear();
        self.finished = false;
    }

    /// Marks an active topic finished. Has no effect on an empty topic.
    pub fn mark_finished(&mut self) -> TopicState {
        if !self.transcript.is_empty() {
            self.finished = true;
        }
        self.state()
    }
}
