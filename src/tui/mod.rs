// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal dashboard
//!
//! A full-screen view of every station with start/stop controls, live
//! readings, trend charts and CSV export. Uses ratatui for rendering and
//! crossterm for input handling.

pub mod app;
pub mod input;
pub mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::{Result, TempwatchError};
use crate::monitor::Monitor;
use app::{App, AppResult};

/// Run the dashboard until the user quits. All stations are stopped on exit.
pub fn run_dashboard(settings: Settings) -> Result<()> {
    let monitor = Monitor::from_settings(&settings)?;
    let mut app = App::new(monitor, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    app.shutdown();

    result
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| TempwatchError::Tui(e.to_string()))?;

        let tick = app.refresh_interval();
        match input::handle_input(app, tick)? {
            AppResult::Continue => {}
            AppResult::Quit => break,
        }
    }

    Ok(())
}

/// Run a single iteration of the app loop (for testing)
/// Returns Ok(true) if the app should quit, Ok(false) otherwise
#[cfg(test)]
fn run_app_iteration<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<bool> {
    terminal
        .draw(|f| ui::draw(f, app))
        .map_err(|e| TempwatchError::Tui(e.to_string()))?;
    Ok(false) // In test mode, we don't poll for events
}
