// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for tempwatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::StationLayout;

/// tempwatch - multi-station temperature detection for your terminal
#[derive(Parser, Debug)]
#[command(name = "tempwatch")]
#[command(version, about = "Multi-station temperature detection for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (.json or .toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use a built-in station layout instead of the configured stations
    #[arg(long, global = true, value_enum)]
    pub layout: Option<StationLayout>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard (default when no command given)
    Dashboard,

    /// Run stations headless and print readings
    Watch(WatchArgs),

    /// Sample for a while, then write one CSV file per station
    Export(ExportArgs),

    /// Show or initialise the settings file
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the watch subcommand
#[derive(clap::Args, Debug, Default)]
pub struct WatchArgs {
    /// Stop after this many seconds (runs until Ctrl+C otherwise)
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Only run these station ids (repeatable)
    #[arg(short, long = "station")]
    pub stations: Vec<u32>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the export subcommand
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Seconds to sample before exporting
    #[arg(short, long, default_value_t = 10)]
    pub duration: u64,

    /// Output directory (defaults to dashboard.export_dir or the working directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,
    /// Print the settings file path
    Path,
    /// Write default settings to the settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for headless commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
