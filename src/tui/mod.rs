//! Terminal User Interface (TUI) for studydash.
//!
//! The interactive study screen: focus timer, stats, weekly chart, habits
//! and tasks. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{Action, App};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::StudyError;
use crate::records::RecordStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: &dyn RecordStore, config: &Config) -> Result<(), StudyError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudyError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StudyError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StudyError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(store, config.feedback.sink());
    log::info!("study screen opened");
    let result = run_app(&mut terminal, &mut app, config.ui.tick_rate());

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    log::info!(
        "study screen closed after {} focus sessions",
        app.timer.session().sessions_completed()
    );
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_>,
    tick_rate: Duration,
) -> Result<(), StudyError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app, tick_rate)? {
            if !app.apply(action, Instant::now()) {
                break;
            }
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
