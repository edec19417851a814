// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;
use tempwatch::error::TempwatchError;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: TempwatchError = io_error.into();

    match error {
        TempwatchError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: TempwatchError = json_error.into();
    assert!(matches!(error, TempwatchError::Json(_)));
}

#[test]
fn test_config_error_display() {
    let error = TempwatchError::Config("duplicate station id 1".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: duplicate station id 1"
    );
}

#[test]
fn test_export_error_display() {
    let error = TempwatchError::Export("no data to export for Station Alpha".to_string());
    assert_eq!(
        error.to_string(),
        "Export error: no data to export for Station Alpha"
    );
}

#[test]
fn test_source_error_display() {
    let error = TempwatchError::Source("sensor offline".to_string());
    assert_eq!(error.to_string(), "Source error: sensor offline");
}
