// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings file management command

use std::path::Path;

use crate::cli::args::SettingsCommands;
use crate::config::Settings;
use crate::error::{Result, TempwatchError};

/// Execute a settings subcommand against the file at `path`.
pub fn execute(command: &SettingsCommands, settings: &Settings, path: &Path) -> Result<()> {
    match command {
        SettingsCommands::Show => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        SettingsCommands::Path => {
            println!("{}", path.display());
        }
        SettingsCommands::Init { force } => {
            init(path, *force)?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

/// Write default settings, refusing to clobber an existing file unless forced.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(TempwatchError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Settings::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        init(&path, false).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();

        let err = init(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tempwatch.toml");
        std::fs::write(&path, "garbage").unwrap();

        init(&path, true).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_execute_path_and_show() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let settings = Settings::default();
        assert!(execute(&SettingsCommands::Path, &settings, &path).is_ok());
        assert!(execute(&SettingsCommands::Show, &settings, &path).is_ok());
        assert!(!path.exists());
    }
}
