// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Manages the dashboard state: which station is selected, the last status
//! message, and the actions bound to keys.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
use crate::monitor::Monitor;
use crate::station::Station;

/// Result of input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Dashboard state
pub struct App {
    pub monitor: Monitor,
    pub settings: Settings,
    /// Index into `monitor.stations()`
    pub selected: usize,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub show_help: bool,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(monitor: Monitor, settings: Settings) -> Self {
        let export_dir = settings.export_dir();
        Self {
            monitor,
            settings,
            selected: 0,
            status_message: None,
            status_is_error: false,
            show_help: false,
            export_dir,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.settings.dashboard.refresh_ms)
    }

    pub fn selected_station(&self) -> Option<&Station> {
        self.monitor.stations().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.monitor.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.monitor.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Select by position; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.monitor.len() {
            self.selected = index;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some(message.into());
        self.status_is_error = is_error;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn start_selected(&mut self) {
        let Some(station) = self.selected_station() else {
            return;
        };
        let name = station.name().to_string();
        match station.start() {
            Ok(()) => self.set_status(format!("{} started", name), false),
            Err(e) => self.set_status(format!("Failed to start {}: {}", name, e), true),
        }
    }

    pub fn stop_selected(&mut self) {
        let Some(station) = self.selected_station() else {
            return;
        };
        let name = station.name().to_string();
        match station.stop() {
            Ok(()) => self.set_status(format!("{} stopped", name), false),
            Err(e) => self.set_status(format!("Failed to stop {}: {}", name, e), true),
        }
    }

    pub fn start_all(&mut self) {
        match self.monitor.start_all() {
            Ok(()) => self.set_status("All stations started", false),
            Err(e) => self.set_status(format!("Failed to start stations: {}", e), true),
        }
    }

    pub fn stop_all(&mut self) {
        match self.monitor.stop_all() {
            Ok(()) => self.set_status("All stations stopped", false),
            Err(e) => self.set_status(format!("Failed to stop stations: {}", e), true),
        }
    }

    /// Write the selected station's readings to the export directory.
    pub fn export_selected(&mut self) {
        let Some(station) = self.selected_station() else {
            return;
        };
        if station.status().readings_count == 0 {
            self.set_status("No data to export", true);
            return;
        }
        let result = station.write_csv(&self.export_dir);
        match result {
            Ok(path) => self.set_status(format!("Data exported to {}", path.display()), false),
            Err(e) => self.set_status(format!("Failed to export data: {}", e), true),
        }
    }

    /// Stop every station before leaving the dashboard.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.monitor.stop_all() {
            tracing::warn!(error = %e, "failed to stop stations on exit");
        }
    }
}
