//! Bulls and Cows - Unified CLI
//!
//! Guess a secret of unique symbols line by line or in a terminal UI.

#![warn(missing_docs)]

mod cli;
mod play;
mod render;
mod tui;

use anyhow::Result;
use bulls_and_cows::{
    JsonFileStore, KeyValueStore, MemoryStore, NullStore, Rules, SavedSession, SessionController,
    Settings,
};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);
    init_tracing(command, &cli.log_file)?;

    let settings =
        Settings::load(&cli.config)?.override_with(cli.alphabet, cli.length, cli.state_file);
    let rules = settings.rules()?;
    info!(alphabet = %rules.alphabet(), length = rules.length(), ?command, "Starting");

    let store = open_store(&settings, cli.memory);
    if command == Command::History {
        print_history(&store, &rules);
        return Ok(());
    }

    let mut controller = SessionController::new(store, rules, settings.generator());
    match command {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(&mut controller, stdin.lock(), &mut stdout)?;
        }
        Command::Tui => tui::run(&mut controller)?,
        Command::History => {}
        Command::Reset => {
            controller.reset();
            println!("Session cleared.");
        }
    }

    Ok(())
}

/// Logs go to a file while the terminal UI owns the screen, to stderr otherwise.
fn init_tracing(command: Command, log_file: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if command == Command::Tui {
        let file = std::fs::File::create(log_file)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Opens the configured backend, degrading to a no-op store if the state
/// file cannot be used.
#[instrument(skip(settings))]
fn open_store(settings: &Settings, memory: bool) -> Box<dyn KeyValueStore> {
    if memory {
        info!("Keeping session in memory");
        return Box::new(MemoryStore::default());
    }

    match JsonFileStore::open(settings.state_file()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "State file unavailable, progress will not be saved");
            Box::new(NullStore)
        }
    }
}

/// Prints the saved session without touching the store.
fn print_history<S: KeyValueStore>(store: &S, rules: &Rules) {
    let Some(saved) = SavedSession::load(store, rules) else {
        println!("No saved game.");
        return;
    };

    if saved.history().is_empty() {
        println!("No guesses yet.");
    }
    for entry in saved.history().all() {
        println!("{}", render::describe(entry, rules.length()));
    }
    if let Some(secret) = saved.revealed_secret() {
        println!("Solved: {} in {} attempts.", secret, saved.attempts());
    }
}
