//! Line-editor support: slash-command completion and hints, `.pdf` path
//! completion after `/upload`, and command highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::MAIN_SEPARATOR;

use colored::Colorize;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

const UPLOAD_PREFIX: &str = "/upload ";

/// Commands starting with `prefix`, while the user is still typing the
/// command word itself.
fn matching_commands(prefix: &str) -> Vec<&'static str> {
    if !prefix.starts_with('/') || prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .copied()
        .filter(|cmd| cmd.starts_with(prefix))
        .collect()
}

/// Keeps directories (to descend into) and PDF files.
fn is_upload_candidate(replacement: &str) -> bool {
    replacement.ends_with(MAIN_SEPARATOR) || replacement.to_ascii_lowercase().ends_with(".pdf")
}

pub struct CliHelper {
    files: FilenameCompleter,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            files: FilenameCompleter::new(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];

        if head.starts_with(UPLOAD_PREFIX) {
            let (start, paths) = self.files.complete_path(line, pos)?;
            let pdfs = paths
                .into_iter()
                .filter(|pair| is_upload_candidate(&pair.replacement))
                .collect();
            return Ok((start.max(UPLOAD_PREFIX.len()), pdfs));
        }

        let commands = matching_commands(head)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, commands))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let head = &line[..pos];
        if head == UPLOAD_PREFIX.trim_end() || head == UPLOAD_PREFIX {
            let pad = if head.ends_with(' ') { "" } else { " " };
            return Some(format!("{pad}<path.pdf>"));
        }

        matching_commands(head)
            .into_iter()
            .find(|cmd| cmd.len() > head.len())
            .map(|cmd| cmd[head.len()..].to_string())
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        match line.split_once(' ') {
            Some((command, rest)) => Owned(format!("{} {}", command.bright_cyan(), rest)),
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Validator for CliHelper {}
