//! Parsing of REPL input lines.

use counsel_core::TopicKind;
use std::path::PathBuf;
use std::str::FromStr;

/// Slash commands offered for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/home",
    "/strengths",
    "/resume",
    "/academic",
    "/advice",
    "/upload",
    "/clear",
    "/finish",
    "/history",
    "/profile",
    "/help",
];

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Topic(TopicKind),
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Topic(kind) => kind.slug(),
        }
    }

    pub fn topic(&self) -> Option<TopicKind> {
        match self {
            Self::Home => None,
            Self::Topic(kind) => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    Navigate(Section),
    Upload(PathBuf),
    Clear,
    Finish,
    History,
    Profile,
    Help,
    /// Free text for the current topic.
    Message(String),
    /// A slash command that could not be understood; carries the message
    /// to show.
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed == "quit" || trimmed == "exit" {
            return Self::Quit;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Message(trimmed.to_string());
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "home" => Self::Navigate(Section::Home),
            "upload" if arg.is_empty() => Self::Invalid("Usage: /upload <path.pdf>".to_string()),
            "upload" => Self::Upload(PathBuf::from(arg)),
            "clear" => Self::Clear,
            "finish" => Self::Finish,
            "history" => Self::History,
            "profile" => Self::Profile,
            "help" => Self::Help,
            other => match TopicKind::from_str(other) {
                Ok(kind) => Self::Navigate(Section::Topic(kind)),
                Err(_) => Self::Invalid(format!("Unknown command: /{}", other)),
            },
        }
    }
}
