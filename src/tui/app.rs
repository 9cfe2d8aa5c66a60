//! Input box state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// The input text changed.
    Edited,
    /// Submit the input as a guess.
    Submit,
    /// Start over with a new secret.
    Reset,
    /// Leave the UI.
    Quit,
}

/// Text being typed and the last status message.
#[derive(Debug, Default)]
pub struct App {
    input: String,
    status: String,
    locked: bool,
}

impl App {
    /// Creates the app, restoring unsubmitted text.
    pub fn new(draft: Option<String>) -> Self {
        Self {
            input: draft.unwrap_or_default(),
            status: String::new(),
            locked: false,
        }
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Stops (or resumes) accepting edits to the input box.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Empties the input box.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Applies a key press to the input box.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Char('c') if control => Action::Quit,
            KeyCode::Char('r') if control => Action::Reset,
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace | KeyCode::Char(_) if self.locked => Action::None,
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    Action::Edited
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.push(c);
                Action::Edited
            }
            _ => Action::None,
        };

        debug!(?key.code, ?action, "Key handled");
        action
    }
}

/// Maps a key press to an answer for the "play again?" prompt.
pub fn prompt_answer(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}
