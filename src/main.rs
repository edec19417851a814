// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tempwatch - multi-station temperature detection for your terminal
//!
//! Entry point for the tempwatch CLI application.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tempwatch::cli::{Cli, Commands};
use tempwatch::commands;
use tempwatch::config::Settings;
use tempwatch::error::Result;
use tempwatch::tui;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let dashboard = matches!(cli.command, None | Some(Commands::Dashboard));
    init_tracing(cli.verbose, dashboard)?;

    // Load settings
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load_from(&config_path)?;
    if let Some(layout) = cli.layout {
        settings = settings.with_layout(layout);
    }
    tracing::debug!(path = %config_path.display(), "settings loaded");

    match cli.command {
        None | Some(Commands::Dashboard) => {
            tokio::task::spawn_blocking(move || tui::run_dashboard(settings))
                .await
                .map_err(|e| tempwatch::TempwatchError::Tui(e.to_string()))??;
        }
        Some(Commands::Watch(args)) => {
            commands::watch::execute(&args, settings).await?;
        }
        Some(Commands::Export(args)) => {
            commands::export::execute(&args, settings).await?;
        }
        Some(Commands::Settings(args)) => {
            let command = args
                .command
                .unwrap_or(tempwatch::cli::SettingsCommands::Show);
            commands::settings::execute(&command, &settings, &config_path)?;
        }
    }

    Ok(())
}

/// Initialize tracing. `RUST_LOG` directives are honoured on top of a WARN
/// default; `-v` turns on debug output for this crate. The dashboard owns the
/// terminal, so its logs go to a file instead of stderr.
fn init_tracing(verbose: u8, to_file: bool) -> Result<()> {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if verbose > 0 {
        let directive = if verbose > 1 {
            "tempwatch=trace"
        } else {
            "tempwatch=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    if to_file {
        Settings::ensure_directories()?;
        let log_path: PathBuf = Settings::log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
