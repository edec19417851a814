// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for tempwatch
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for tempwatch operations
#[derive(Error, Debug)]
pub enum TempwatchError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Station lifecycle errors
    #[error("Station error: {0}")]
    Station(String),

    /// Temperature source errors
    #[error("Source error: {0}")]
    Source(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// CSV encoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for tempwatch operations
pub type Result<T> = std::result::Result<T, TempwatchError>;

impl From<toml::de::Error> for TempwatchError {
    fn from(err: toml::de::Error) -> Self {
        TempwatchError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for TempwatchError {
    fn from(err: toml::ser::Error) -> Self {
        TempwatchError::Toml(err.to_string())
    }
}
