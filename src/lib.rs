// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tempwatch - multi-station temperature detection for the terminal.
//!
//! This crate exposes the runtime used by the `tempwatch` CLI (`src/main.rs`).
//!
//! Architecture highlights:
//! - `station`: independently started/stopped samplers, one worker thread each,
//!   with bounded reading history and threshold classification
//! - `monitor`: the ordered set of stations a front-end drives
//! - `export`: CSV encoding and file naming for station histories
//! - `config`: JSON/TOML settings with validation
//! - `tui`: the interactive dashboard; `commands`: headless subcommands

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod monitor;
pub mod station;
pub mod tui;

pub use error::{Result, TempwatchError};
