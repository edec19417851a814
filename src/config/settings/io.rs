// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
            _ => FileFormat::Json,
        }
    }
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::tempwatch_home().join("settings.json")
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = match FileFormat::for_path(path) {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };
        Ok(settings)
    }

    /// Save settings to a specific path, fully overwriting it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = match FileFormat::for_path(path) {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the tempwatch home directory (~/.tempwatch or $TEMPWATCH_HOME).
    pub fn tempwatch_home() -> PathBuf {
        if let Ok(home) = std::env::var("TEMPWATCH_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tempwatch")
    }

    /// Log file used while the dashboard owns the terminal.
    pub fn log_path() -> PathBuf {
        Self::tempwatch_home().join("tempwatch.log")
    }

    /// Directory CSV exports are written to.
    pub fn export_dir(&self) -> PathBuf {
        self.dashboard
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Ensure the home directory exists.
    pub fn ensure_directories() -> Result<()> {
        let home = Self::tempwatch_home();
        if !home.exists() {
            std::fs::create_dir_all(&home)?;
        }
        Ok(())
    }
}
