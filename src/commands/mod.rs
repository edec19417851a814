// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Non-interactive subcommands
//!
//! `watch` and `export` drive the same stations as the dashboard without
//! taking over the terminal; `settings` manages the settings file.

pub mod export;
pub mod settings;
pub mod watch;

use crate::config::Settings;
use crate::error::{Result, TempwatchError};

/// Keep only the listed station ids. An empty list keeps every station.
pub fn select_stations(mut settings: Settings, ids: &[u32]) -> Result<Settings> {
    if ids.is_empty() {
        return Ok(settings);
    }

    if let Some(missing) = ids
        .iter()
        .find(|id| !settings.stations.iter().any(|s| s.id == **id))
    {
        return Err(TempwatchError::InvalidInput(format!(
            "unknown station id {}",
            missing
        )));
    }

    settings.stations.retain(|s| ids.contains(&s.id));
    Ok(settings)
}
