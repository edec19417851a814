// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input handling for the dashboard
//!
//! Handles keyboard input and maps to application actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use super::app::{App, AppResult};
use crate::error::Result;

pub const HELP_TEXT: &str =
    "←→/hl: Select | 1-9: Jump | s: Start | x: Stop | a: Start all | z: Stop all | e: Export CSV | q: Quit";

/// Wait up to `timeout` for a key and apply it. Returning without a key is a
/// refresh tick.
pub fn handle_input(app: &mut App, timeout: Duration) -> Result<AppResult> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                return Ok(AppResult::Continue);
            }
            return Ok(handle_key(app, key.code, key.modifiers));
        }
    }

    Ok(AppResult::Continue)
}

/// Apply a single key press to the app.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> AppResult {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return AppResult::Quit;
    }

    if app.show_help {
        // Any key closes the help overlay
        app.show_help = false;
        return AppResult::Continue;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,

        KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next(),

        KeyCode::Char(c @ '1'..='9') => {
            if let Some(index) = c.to_digit(10) {
                app.select(index as usize - 1);
            }
        }

        KeyCode::Char('s') | KeyCode::Enter => app.start_selected(),
        KeyCode::Char('x') => app.stop_selected(),
        KeyCode::Char('a') => app.start_all(),
        KeyCode::Char('z') => app.stop_all(),
        KeyCode::Char('e') => app.export_selected(),

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }

    AppResult::Continue
}
