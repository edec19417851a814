// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The set of stations a front-end controls.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Result, TempwatchError};
use crate::station::{Station, StationStatus};

/// Owns every configured station. Dropping the monitor stops them all.
#[derive(Debug)]
pub struct Monitor {
    stations: Vec<Station>,
}

impl Monitor {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Build stations in configured order. Settings are validated first.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let stations = settings
            .stations
            .iter()
            .map(|config| Station::from_config(config, settings))
            .collect();
        Ok(Self::new(stations))
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn station(&self, id: u32) -> Option<&Station> {
        self.stations.iter().find(|s| s.id() == id)
    }

    fn require(&self, id: u32) -> Result<&Station> {
        self.station(id)
            .ok_or_else(|| TempwatchError::Station(format!("unknown station id {}", id)))
    }

    pub fn start(&self, id: u32) -> Result<()> {
        self.require(id)?.start()
    }

    pub fn stop(&self, id: u32) -> Result<()> {
        self.require(id)?.stop()
    }

    pub fn start_all(&self) -> Result<()> {
        for station in &self.stations {
            station.start()?;
        }
        Ok(())
    }

    /// Stops every station, reporting the first failure after trying them all.
    pub fn stop_all(&self) -> Result<()> {
        let mut first_err = None;
        for station in &self.stations {
            if let Err(e) = station.stop() {
                tracing::warn!(station = station.name(), error = %e, "failed to stop station");
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn statuses(&self) -> Vec<StationStatus> {
        self.stations.iter().map(Station::status).collect()
    }

    /// Export every station that has readings. Empty stations are skipped.
    pub fn export_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for station in &self.stations {
            if station.status().readings_count == 0 {
                tracing::info!(station = station.name(), "no data to export");
                continue;
            }
            written.push(station.write_csv(dir)?);
        }
        Ok(written)
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        let _ = self.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StationConfig, StationLayout};
    use crate::station::{ScriptedSource, StationOptions};
    use std::time::Duration;

    fn scripted_monitor() -> Monitor {
        let options = StationOptions {
            interval: Duration::from_secs(60),
            ..StationOptions::default()
        };
        Monitor::new(vec![
            Station::new(
                1,
                "Station Alpha",
                options.clone(),
                Box::new(ScriptedSource::new(vec![21.0])),
            ),
            Station::new(
                2,
                "Station Beta",
                options,
                Box::new(ScriptedSource::new(vec![30.0])),
            ),
        ])
    }

    #[test]
    fn test_from_settings_default_layout() {
        let monitor = Monitor::from_settings(&Settings::default()).unwrap();
        assert_eq!(monitor.len(), 3);
        let names: Vec<&str> = monitor.stations().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Station Alpha", "Station Beta", "Station Gamma"]);
    }

    #[test]
    fn test_from_settings_two_station_layout() {
        let settings = Settings::default().with_layout(StationLayout::Two);
        let monitor = Monitor::from_settings(&settings).unwrap();
        assert_eq!(monitor.len(), 2);
    }

    #[test]
    fn test_from_settings_applies_station_threshold() {
        let mut settings = Settings::default();
        settings.stations = vec![StationConfig::new(5, "Lab").with_threshold(31.0)];
        let monitor = Monitor::from_settings(&settings).unwrap();
        assert_eq!(monitor.station(5).unwrap().threshold(), 31.0);
    }

    #[test]
    fn test_from_settings_rejects_invalid() {
        let mut settings = Settings::default();
        settings.stations.clear();
        assert!(Monitor::from_settings(&settings).is_err());
    }

    #[test]
    fn test_unknown_station() {
        let monitor = scripted_monitor();
        let err = monitor.start(42).unwrap_err();
        assert!(err.to_string().contains("unknown station id 42"));
    }

    #[test]
    fn test_start_and_stop_individually() {
        let monitor = scripted_monitor();
        monitor.start(2).unwrap();
        assert!(!monitor.station(1).unwrap().is_running());
        assert!(monitor.station(2).unwrap().is_running());
        monitor.stop(2).unwrap();
        assert!(!monitor.station(2).unwrap().is_running());
    }

    #[test]
    fn test_start_all_and_stop_all() {
        let monitor = scripted_monitor();
        monitor.start_all().unwrap();
        assert!(monitor.statuses().iter().all(|s| s.is_running));
        monitor.stop_all().unwrap();
        assert!(monitor.statuses().iter().all(|s| !s.is_running));
    }

    #[test]
    fn test_export_all_skips_empty() {
        let monitor = scripted_monitor();
        monitor.station(2).unwrap().sample_now().unwrap();

        let temp_dir = tempfile::TempDir::new().unwrap();
        let written = monitor.export_all(temp_dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        let name = written[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Station_Beta_"));
    }
}
