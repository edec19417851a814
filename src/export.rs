// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CSV export of station readings
//!
//! Columns: `Timestamp,Temperature_Celsius,Station_Name,Station_ID`, with
//! timestamps in local time as `%Y-%m-%d %H:%M:%S`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Result, TempwatchError};
use crate::station::Reading;

pub const CSV_HEADER: [&str; 4] = [
    "Timestamp",
    "Temperature_Celsius",
    "Station_Name",
    "Station_ID",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Encode readings as CSV text, header first.
pub fn encode_csv<'a>(
    readings: impl IntoIterator<Item = &'a Reading>,
    station_name: &str,
    station_id: u32,
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    let id = station_id.to_string();
    for reading in readings {
        writer.write_record([
            reading.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            format_temperature(reading.temperature),
            station_name.to_string(),
            id.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TempwatchError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TempwatchError::Export(e.to_string()))
}

/// `Station Alpha` at 2025-03-04 05:06:07 becomes
/// `Station_Alpha_temperature_data_20250304_050607.csv`.
pub fn export_filename(station_name: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_temperature_data_{}.csv",
        station_name.replace(' ', "_"),
        now.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

/// Write CSV text to `dir/file_name`, creating `dir` if needed. Existing
/// files are never overwritten: a clash gets a `_1`, `_2`, ... suffix.
pub fn write_export(dir: &Path, file_name: &str, csv: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut attempt = 0u32;
    loop {
        let candidate = if attempt == 0 {
            file_name.to_string()
        } else {
            format!("{}_{}{}", stem, attempt, extension)
        };
        let path = dir.join(candidate);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(csv.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Whole numbers keep one decimal so the column reads as a float.
pub fn format_temperature(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
