//! Terminal rendering.

use colored::Colorize;
use counsel_core::{CounselError, Session, TopicKind, Turn, TurnRole, aggregate, has_profile};

use crate::command::Section;

const HOME_CARDS: [(&str, &str); 3] = [
    ("Explore Your Strengths", "Uncover your unique abilities and talents."),
    ("Analyze Your Experience", "Get insights from your past work and projects."),
    ("Plan Your Future", "Receive personalized career recommendations."),
];

pub fn print_banner() {
    println!("{}", "=== Student Career Counselor ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();
}

pub fn print_section(section: Section, session: &Session) {
    match section {
        Section::Home => print_home(),
        Section::Topic(kind) => print_topic_header(kind, session),
    }
}

fn print_home() {
    println!("{}", "Welcome to Student Career Counselor".bright_magenta().bold());
    println!("Discover your perfect career path with our AI-powered guidance.");
    println!();
    for (title, text) in HOME_CARDS {
        println!("  {}", title.bold());
        println!("  {}", text.bright_black());
        println!();
    }
    let sections: Vec<String> = TopicKind::ALL
        .iter()
        .map(|kind| format!("/{}", kind.slug()))
        .collect();
    println!("{}", format!("Pick a section: {}", sections.join(" ")).bright_black());
}

fn print_topic_header(kind: TopicKind, session: &Session) {
    println!("{}", kind.heading().bright_magenta().bold());
    println!("{}", kind.description().bright_black());

    if kind == TopicKind::ResumeReview && session.resume_text().is_none() {
        println!("{}", "Attach a resume with /upload <path.pdf>.".yellow());
    }
    if kind.is_advice() && !has_profile(session) {
        println!("{}", CounselError::InsufficientProfile.to_string().yellow());
    }

    let transcript = session.transcript(kind);
    if !transcript.is_empty() {
        println!();
        print_transcript(transcript);
    }
}

pub fn print_turn(turn: &Turn) {
    match turn.role() {
        TurnRole::User => {
            for line in turn.content().lines() {
                println!("{}", format!("> {}", line).green());
            }
        }
        TurnRole::Assistant => {
            for line in turn.content().lines() {
                println!("{}", line.bright_blue());
            }
            println!();
        }
    }
}

pub fn print_transcript(transcript: &[Turn]) {
    for turn in transcript {
        print_turn(turn);
    }
}

pub fn print_profile(session: &Session) {
    let profile = aggregate(session);
    if profile.is_empty() {
        println!("{}", "No profile yet. Talk to one of the sections first.".bright_black());
    } else {
        println!("{}", "Your profile so far:".bright_magenta());
        println!("{}", profile);
    }
}

pub fn print_help() {
    let rows = [
        ("/home", "welcome screen"),
        ("/strengths /resume /academic /advice", "switch section"),
        ("/upload <path.pdf>", "attach your resume"),
        ("/clear", "clear the current section"),
        ("/finish", "finish the current section"),
        ("/history", "show the current conversation"),
        ("/profile", "show what the advisor knows about you"),
        ("quit, exit, Ctrl-D", "leave"),
    ];
    for (command, text) in rows {
        println!("  {} {}", format!("{:<38}", command).bright_cyan(), text);
    }
}

pub fn print_notice(message: &str) {
    println!("{}", message.bright_green());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", err).red());
}
