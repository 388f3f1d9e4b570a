use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use jobtrack_application::ApplicationTracker;
use jobtrack_core::JobTrackError;
use jobtrack_core::application::{ApplicationDraft, ApplicationField, ApplicationRepository};
use jobtrack_core::storage::KeyValueStore;
use jobtrack_infrastructure::{ConfigService, FileStore, KvApplicationRepository, MemoryStore};

mod commands;
mod logging;
mod render;

use commands::{COMMAND_NAMES, Command, HELP_LINES};
use logging::LogTarget;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "jobtrack - keep track of your job applications", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the stored applications and logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk and logs go to stderr
    #[arg(long)]
    ephemeral: bool,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|c| c.to_string()).collect(),
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
        let line = &line[..pos];

        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|cmd| cmd == first) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

type LineEditor = Editor<CliHelper, DefaultHistory>;

/// Whether the REPL should keep reading input.
enum Flow {
    Continue,
    Quit,
}

/// Binds the tracker to terminal input and output.
struct Repl<R> {
    tracker: ApplicationTracker<R>,
    date_format: String,
}

impl<R: ApplicationRepository> Repl<R> {
    fn handle(&mut self, command: Command, rl: &mut LineEditor) -> Flow {
        let outcome = match command {
            Command::List => {
                self.print_list();
                Ok(())
            }
            Command::Add => self.add(rl),
            Command::Edit(id) => {
                let opened = self.tracker.begin_edit(id).map(|_| ());
                opened.map(|()| self.print_edit())
            }
            Command::Set(field, value) => self
                .tracker
                .update_edit_field(field, &value)
                .map(|_| self.print_edit()),
            Command::Save => self.tracker.commit_pending_edit().map(|record| {
                println!("{}", format!("Saved application #{}", record.id).green());
            }),
            Command::Cancel => {
                self.tracker.cancel_edit();
                println!("{}", "Edit discarded".bright_black());
                Ok(())
            }
            Command::Delete(id) => self.tracker.delete_record(id).map(|_| {
                println!("{}", format!("Deleted application #{}", id).green());
            }),
            Command::Details(id) => {
                if self.tracker.record(id).is_none() {
                    Err(JobTrackError::not_found("application", id.to_string()))
                } else {
                    self.tracker.toggle_details(id);
                    self.print_record(id);
                    Ok(())
                }
            }
            Command::Summary => {
                println!("{}", render::summary(&self.tracker.summary()));
                Ok(())
            }
            Command::Reset => self.tracker.reset_to_default().map(|_| {
                println!("{}", "Reset to default data".bright_yellow());
                self.print_list();
            }),
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Quit => return Flow::Quit,
        };

        if let Err(e) = outcome {
            report_error(&e);
        }
        Flow::Continue
    }

    /// Prompts for each field of a new application.
    fn add(&mut self, rl: &mut LineEditor) -> Result<(), JobTrackError> {
        let Some(company_name) = prompt(rl, "Company name*: ") else {
            return Ok(());
        };
        let Some(job_title) = prompt(rl, "Job title*: ") else {
            return Ok(());
        };
        let Some(date_applied) = prompt(rl, "Date applied* (YYYY-MM-DD): ") else {
            return Ok(());
        };
        let Some(status) = prompt(rl, "Status [Applied/Interview/Offer/Rejected]: ") else {
            return Ok(());
        };
        let Some(details) = prompt(rl, "Details: ") else {
            return Ok(());
        };

        let mut draft = ApplicationDraft::new(company_name, job_title, date_applied)
            .with_details(details);
        if !status.is_empty() {
            draft.set_field(ApplicationField::Status, &status)?;
        }

        let record = self.tracker.add_record(draft)?;
        println!("{}", format!("Added application #{}", record.id).green());
        Ok(())
    }

    fn print_list(&self) {
        let records = self.tracker.records();
        if records.is_empty() {
            println!("{}", "No applications yet. Type 'add' to create one.".bright_black());
            return;
        }
        for record in records {
            println!(
                "{}\n",
                render::card(record, self.tracker.is_expanded(record.id), &self.date_format)
            );
        }
    }

    fn print_record(&self, id: u64) {
        if let Some(record) = self.tracker.record(id) {
            println!(
                "{}",
                render::card(record, self.tracker.is_expanded(id), &self.date_format)
            );
        }
    }

    fn print_edit(&self) {
        if let (Some(id), Some(draft)) = (self.tracker.editing_id(), self.tracker.edit_draft()) {
            println!("{}", render::edit_overlay(id, draft));
        }
    }
}

/// Reads one line; `None` when the user aborts with Ctrl-C or Ctrl-D.
fn prompt(rl: &mut LineEditor, label: &str) -> Option<String> {
    match rl.readline(label) {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => {
            println!("{}", "Cancelled".bright_black());
            None
        }
    }
}

fn report_error(error: &JobTrackError) {
    match error {
        JobTrackError::Validation { missing } => {
            println!(
                "{}",
                format!("Please fill in all required fields ({})", missing.join(", ")).red()
            );
        }
        JobTrackError::NotFound {
            entity_type: "edit",
            ..
        } => {
            println!("{}", "No edit in progress. Use 'edit <id>' first.".red());
        }
        JobTrackError::NotFound { id, .. } => {
            println!("{}", format!("No application with id {}", id).red());
        }
        other => {
            tracing::error!(error = %other, "Operation failed");
            println!("{}", format!("Error: {}", other).red());
        }
    }
}

fn print_help() {
    for (usage, text) in HELP_LINES {
        println!("  {}{}", format!("{:<22}", usage).bright_cyan(), text);
    }
}

/// The main entry point for the jobtrack REPL.
///
/// 1. Loads configuration and resolves the data directory
/// 2. Installs logging (rolling files, or stderr for ephemeral sessions)
/// 3. Initializes the tracker from the chosen store
/// 4. Dispatches each input line to the tracker until `quit`
fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Configuration =====
    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = config_service.load()?;
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ConfigService::resolve_data_dir(&config)?,
    };

    let log_target = LogTarget::for_session(&data_dir, cli.ephemeral);
    let _log_guard = logging::init(&log_target, &config.log_level)?;
    tracing::info!(
        data_dir = %data_dir.display(),
        ephemeral = cli.ephemeral,
        "Starting jobtrack"
    );

    // ===== Backend Initialization =====
    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&data_dir))
    };
    let tracker = ApplicationTracker::initialize(KvApplicationRepository::new(store));
    let mut repl = Repl {
        tracker,
        date_format: config.date_format,
    };

    // ===== REPL Setup =====
    let mut rl: LineEditor = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Job Application Tracker ===".bright_magenta().bold());
    println!("{}", "Type 'list' to see applications, 'help' for all commands.".bright_black());
    println!();

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match Command::parse(trimmed) {
                    Ok(command) => {
                        if let Flow::Quit = repl.handle(command, &mut rl) {
                            println!("{}", "Goodbye!".bright_green());
                            break;
                        }
                    }
                    Err(message) => println!("{}", message.bright_black()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Readline failure");
                return Err(e.into());
            }
        }
    }

    tracing::info!("jobtrack exiting");
    Ok(())
}
