use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_subscriber::EnvFilter;

use counsel_application::TopicController;
use counsel_core::{CounselError, Session, TopicKind};
use counsel_infrastructure::{ConfigService, extract_pdf_file};
use counsel_interaction::HttpPredictionClient;

mod command;
mod helper;
mod view;

use command::{Command, Section};
use helper::CliHelper;

#[derive(Parser, Debug)]
#[command(name = "counsel")]
#[command(about = "Student Career Counselor - guided career intake in the terminal", long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/counsel/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resume PDF to attach at start-up
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Section to open first (strengths, resume, academic, advice)
    #[arg(long)]
    topic: Option<TopicKind>,
}

/// Logs go to stderr so they never interleave with the conversation.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

enum Flow {
    Continue,
    Quit,
}

struct Repl {
    controller: TopicController,
    session: Session,
    section: Section,
}

impl Repl {
    fn new(controller: TopicController) -> Self {
        Self {
            controller,
            session: Session::new(),
            section: Section::Home,
        }
    }

    fn prompt(&self) -> String {
        format!("{}> ", self.section.slug())
    }

    async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Empty => {}
            Command::Quit => return Flow::Quit,
            Command::Navigate(section) => self.navigate(section),
            Command::Upload(path) => self.upload(&path).await,
            Command::Help => view::print_help(),
            Command::Profile => view::print_profile(&self.session),
            Command::Invalid(message) => view::print_warning(&message),
            Command::Clear => {
                if let Some(kind) = self.current_topic() {
                    self.controller.clear(&mut self.session, kind);
                    view::print_notice(&format!("{} cleared.", kind.title()));
                }
            }
            Command::Finish => {
                if let Some(kind) = self.current_topic() {
                    let notice = self.controller.finish(&mut self.session, kind);
                    view::print_notice(&notice.message);
                }
            }
            Command::History => {
                if let Some(kind) = self.current_topic() {
                    view::print_transcript(self.session.transcript(kind));
                }
            }
            Command::Message(text) => match self.section {
                Section::Home => {
                    view::print_warning("Pick a section first. Type '/help' to see them.")
                }
                Section::Topic(kind) => self.submit(kind, &text).await,
            },
        }
        Flow::Continue
    }

    /// The topic for topic-scoped commands; warns when on Home.
    fn current_topic(&self) -> Option<TopicKind> {
        let topic = self.section.topic();
        if topic.is_none() {
            view::print_warning("This command needs a section. Try /strengths first.");
        }
        topic
    }

    fn navigate(&mut self, section: Section) {
        self.section = section;
        println!();
        view::print_section(section, &self.session);
    }

    async fn submit(&mut self, kind: TopicKind, text: &str) {
        println!("{}", "...".bright_black());
        match self.controller.submit(&mut self.session, kind, text).await {
            Ok(reply) => view::print_turn(&reply),
            Err(err) => report(&err),
        }
    }

    async fn upload(&mut self, path: &Path) {
        let text = match extract_pdf_file(path) {
            Ok(text) => text,
            Err(err) => {
                report(&err);
                return;
            }
        };

        self.section = Section::Topic(TopicKind::ResumeReview);
        println!();
        println!("{}", TopicKind::ResumeReview.heading().bright_magenta().bold());
        println!("{}", "Extracted resume text:".bright_black());
        println!("{}", text);
        println!();

        match self.controller.attach_resume(&mut self.session, &text).await {
            Ok(attachment) => {
                if attachment.replaced {
                    view::print_notice("Resume replaced. New questions will use the new text.");
                }
                if let Some(reply) = attachment.seed_reply {
                    view::print_turn(&reply);
                }
            }
            Err(err) => report(&err),
        }
    }
}

fn report(err: &CounselError) {
    if err.is_user_facing() {
        view::print_warning(&err.to_string());
    } else {
        tracing::error!("{}", err);
        view::print_error(err);
    }
}

/// Entry point for the counsel REPL.
///
/// Loads config, builds the prediction client and controller, optionally
/// attaches a resume, then reads lines until quit or Ctrl-D. Each line is
/// handled to completion before the next prompt, so turns stay in order.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config_service = match &args.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config()?;
    tracing::debug!(?config, "Loaded configuration");

    let client = HttpPredictionClient::new(&config.prediction)?;
    let controller = TopicController::new(Arc::new(client), config.endpoints.clone());

    let mut repl = Repl::new(controller);

    let helper = CliHelper::new();
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    view::print_banner();
    if let Some(path) = &args.resume {
        repl.upload(path).await;
    }
    match args.topic {
        Some(kind) => repl.navigate(Section::Topic(kind)),
        None if args.resume.is_none() => view::print_section(Section::Home, &repl.session),
        None => {}
    }

    loop {
        let readline = rl.readline(&repl.prompt());

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if let Flow::Quit = repl.handle(Command::parse(&line)).await {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
