// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use tempfile::TempDir;
use tempwatch::config::{Settings, SourceConfig, StationConfig, StationLayout};

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.stations.len(), 3);
    assert!((settings.alerts.default_threshold - 26.0).abs() < f64::EPSILON);
    assert!((settings.alerts.cold_below - 20.0).abs() < f64::EPSILON);
    assert_eq!(settings.sampling.interval_ms, 1000);
    assert_eq!(settings.sampling.history_capacity, 100);
    assert_eq!(settings.dashboard.refresh_ms, 1000);
}

#[test]
fn test_settings_deserialization() {
    let json = r#"{
        "stations": [
            { "id": 1, "name": "Server Room", "threshold": 30.0 },
            { "id": 2, "name": "CPU", "source": { "kind": "sysfs", "path": "/sys/class/thermal/thermal_zone0/temp" } }
        ],
        "alerts": { "cold_below": 15.0 }
    }"#;

    let settings: Settings = serde_json::from_str(json).expect("Should deserialize");
    assert_eq!(settings.stations.len(), 2);
    assert_eq!(settings.stations[0].threshold, Some(30.0));
    assert_eq!(settings.stations[0].source, SourceConfig::default());
    assert_eq!(
        settings.stations[1].source,
        SourceConfig::Sysfs {
            path: PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
        }
    );
    assert!((settings.alerts.cold_below - 15.0).abs() < f64::EPSILON);
    assert!((settings.alerts.default_threshold - 26.0).abs() < f64::EPSILON);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lab.toml");
    std::fs::write(
        &path,
        r#"
[sampling]
interval_ms = 500

[[stations]]
id = 10
name = "Incubator"
threshold = 37.5

[stations.source]
kind = "simulated"
base = 37.0
variation = 0.5
seed = 7
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.sampling.interval_ms, 500);
    assert_eq!(settings.stations.len(), 1);
    assert_eq!(settings.stations[0].name, "Incubator");
    assert_eq!(
        settings.stations[0].source,
        SourceConfig::Simulated {
            base: 37.0,
            variation: 0.5,
            seed: Some(7)
        }
    );
}

#[test]
fn test_settings_save_load_roundtrip_with_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = Settings::default().with_layout(StationLayout::Two);
    settings.stations[1] = StationConfig::new(2, "Station Beta").with_threshold(24.0);
    settings.dashboard.export_dir = Some(temp_dir.path().join("exports"));
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.export_dir(), temp_dir.path().join("exports"));
}

#[test]
fn test_validation_reports_duplicate_ids() {
    let mut settings = Settings::default();
    settings.stations[2].id = 1;
    let err = settings.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate station id 1"));
}

#[test]
fn test_infinite_variation_is_rejected_before_stations_start() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lab.toml");
    std::fs::write(
        &path,
        r#"
[[stations]]
id = 1
name = "A"

[stations.source]
kind = "simulated"
base = 25.0
variation = inf
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    let err = tempwatch::monitor::Monitor::from_settings(&settings)
        .err()
        .expect("infinite variation must not validate");
    assert!(err.to_string().contains("station 1 variation"));
}

#[test]
fn test_nan_base_is_rejected() {
    let mut settings = Settings::default();
    settings.stations[0].source = SourceConfig::Simulated {
        base: f64::NAN,
        variation: 5.0,
        seed: None,
    };
    let err = settings.validate().unwrap_err();
    assert!(err.to_string().contains("station 1 base"));
}
