//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::StudyError;
use crate::features::focus::Mode;
use crate::tui::app::{Action, App};

const HELP: &str =
    "space:start/pause | r:reset | m/tab:switch | f/b:focus/break | j/k:nav | enter/x:toggle task | q:quit";

/// Wait up to `timeout` for a key and map it to an action.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>, timeout: Duration) -> Result<Option<Action>, StudyError> {
    if !event::poll(timeout).map_err(|e| StudyError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| StudyError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action, applying navigation directly.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if key.code == KeyCode::Char('g') {
        app.handle_g();
        return None;
    }
    let help_shown = app.status.as_deref() == Some(HELP);
    app.cancel_pending();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Timer
        KeyCode::Char(' ') => Some(Action::ToggleTimer),
        KeyCode::Char('r') => Some(Action::ResetTimer),
        KeyCode::Char('m') | KeyCode::Tab => Some(Action::SwitchMode),
        KeyCode::Char('f') => Some(Action::SelectMode(Mode::Focus)),
        KeyCode::Char('b') => Some(Action::SelectMode(Mode::Break)),

        // Tasks
        KeyCode::Enter | KeyCode::Char('x') => Some(Action::ToggleTask),
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.select_last();
            None
        }
        KeyCode::Home => {
            app.select_first();
            None
        }

        KeyCode::Char('?') => {
            if !help_shown {
                app.status = Some(HELP.to_string());
            }
            None
        }

        _ => None,
    }
}
