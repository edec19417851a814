// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use tempwatch::cli::{Cli, Commands, OutputFormat, SettingsCommands};
use tempwatch::config::StationLayout;

#[test]
fn test_parse_default_is_dashboard() {
    let cli = Cli::try_parse_from(vec!["tempwatch"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_dashboard_two_stations() {
    let args = vec!["tempwatch", "dashboard", "--layout", "two"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Dashboard)));
    assert_eq!(cli.layout, Some(StationLayout::Two));
}

#[test]
fn test_parse_watch_defaults() {
    let cli = Cli::try_parse_from(vec!["tempwatch", "watch"]).expect("Valid command parsing");
    if let Some(Commands::Watch(args)) = cli.command {
        assert!(args.duration.is_none());
        assert!(args.stations.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
    } else {
        panic!("Expected Watch command");
    }
}

#[test]
fn test_parse_export_with_out_dir() {
    let args = vec!["tempwatch", "export", "-d", "3", "-o", "/tmp/exports"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Export(export_args)) = cli.command {
        assert_eq!(export_args.duration, 3);
        assert_eq!(
            export_args.out,
            Some(std::path::PathBuf::from("/tmp/exports"))
        );
    } else {
        panic!("Expected Export command");
    }
}

#[test]
fn test_parse_settings_path() {
    let args = vec!["tempwatch", "settings", "path"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Settings(settings_args)) = cli.command {
        assert!(matches!(settings_args.command, Some(SettingsCommands::Path)));
    } else {
        panic!("Expected Settings command");
    }
}

#[test]
fn test_parse_global_config_after_subcommand() {
    let args = vec!["tempwatch", "watch", "--config", "lab.toml"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.config, Some(std::path::PathBuf::from("lab.toml")));
}

#[test]
fn test_parse_invalid_layout() {
    let args = vec!["tempwatch", "--layout", "five"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_parse_unknown_subcommand() {
    let args = vec!["tempwatch", "launch-rockets"];
    assert!(Cli::try_parse_from(args).is_err());
}
