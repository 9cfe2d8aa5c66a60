//! Full-screen terminal UI for bulls and cows.

mod app;
mod ui;

use anyhow::Result;
use app::{Action, App};
use bulls_and_cows::{IgnoreReason, KeyValueStore, PendingWin, SessionController, Submission};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::render;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const FROZEN_HINT: &str = "Game over. Press Ctrl-R for a new game.";

/// Runs the terminal UI until the player quits.
#[instrument(skip_all)]
pub fn run<S: KeyValueStore>(controller: &mut SessionController<S>) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    res
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Tui,
    controller: &mut SessionController<S>,
) -> Result<()> {
    let mut app = App::new(controller.draft());
    if controller.is_frozen() {
        app.set_status(FROZEN_HINT);
    }

    loop {
        terminal.draw(|frame| ui::draw(frame, controller, &app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Frozen sessions take no input until a reset.
        app.set_locked(controller.is_frozen());
        match app.handle_key(key) {
            Action::None => {}
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Edited => controller.save_draft(app.input()),
            Action::Reset => {
                controller.reset();
                app.clear_input();
                app.set_status("New secret chosen.");
            }
            Action::Submit => {
                let raw = app.input().to_string();
                let rules = controller.rules().clone();

                match controller.submit_guess(&raw) {
                    Submission::Ignored(IgnoreReason::Frozen) => app.set_status(FROZEN_HINT),
                    Submission::Ignored(_) => {}
                    Submission::Invalid(input) => {
                        app.set_status(render::invalid_message(&input, &rules))
                    }
                    Submission::Recorded(entry) => {
                        app.clear_input();
                        app.set_status(render::describe(&entry, rules.length()));
                    }
                    Submission::Won(pending) => {
                        app.clear_input();
                        let again = ask_play_again(terminal, &pending, &app)?;
                        pending.resolve(again);
                        app.set_status(if again {
                            "New secret chosen."
                        } else {
                            FROZEN_HINT
                        });
                    }
                }
            }
        }
    }
}

/// Blocks on the "play again?" dialog. No guess can be submitted meanwhile.
fn ask_play_again<S: KeyValueStore>(
    terminal: &mut Tui,
    pending: &PendingWin<'_, S>,
    app: &App,
) -> Result<bool> {
    loop {
        terminal.draw(|frame| {
            ui::draw(frame, pending.controller(), app);
            ui::draw_prompt(frame, pending.entry(), pending.controller().attempts());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(answer) = app::prompt_answer(key) {
                return Ok(answer);
            }
        }
    }
}
