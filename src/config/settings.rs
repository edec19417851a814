// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for tempwatch
//!
//! Handles loading and saving settings from ~/.tempwatch/settings.json
//! (or a TOML file passed with `--config`).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod validation;

/// Main settings structure, stored in ~/.tempwatch/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Stations to monitor, in display order
    #[serde(default = "default_stations")]
    pub stations: Vec<StationConfig>,

    /// Sampling cadence and history retention
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Classification thresholds
    #[serde(default)]
    pub alerts: AlertsConfig,

    /// Dashboard appearance and export location
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            sampling: SamplingConfig::default(),
            alerts: AlertsConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Configuration for a single station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationConfig {
    /// Numeric identifier, unique across stations
    pub id: u32,

    /// Display name, also used in CSV exports
    pub name: String,

    /// Per-station abnormal threshold; falls back to `alerts.default_threshold`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Where readings come from
    #[serde(default)]
    pub source: SourceConfig,
}

impl StationConfig {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            threshold: None,
            source: SourceConfig::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }
}

/// Temperature source selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Uniformly distributed readings around a base temperature
    Simulated {
        #[serde(default = "default_base_temperature")]
        base: f64,
        #[serde(default = "default_variation")]
        variation: f64,
        /// Fixed RNG seed for reproducible runs
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// A Linux thermal zone file such as /sys/class/thermal/thermal_zone0/temp
    Sysfs { path: PathBuf },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Simulated {
            base: default_base_temperature(),
            variation: default_variation(),
            seed: None,
        }
    }
}

/// Sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    /// Milliseconds between readings
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Maximum readings retained per station
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            history_capacity: default_history_capacity(),
        }
    }
}

/// Alert thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertsConfig {
    /// Readings strictly above this are abnormal
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Readings strictly below this are cold
    #[serde(default = "default_cold_below")]
    pub cold_below: f64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            cold_below: default_cold_below(),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Milliseconds between screen refreshes
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Directory for CSV exports (defaults to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Lower bound of the chart's temperature axis
    #[serde(default = "default_chart_min")]
    pub chart_min: f64,

    /// Upper bound of the chart's temperature axis
    #[serde(default = "default_chart_max")]
    pub chart_max: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
            export_dir: None,
            chart_min: default_chart_min(),
            chart_max: default_chart_max(),
        }
    }
}

/// Built-in station sets for two- and three-station setups
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StationLayout {
    /// Station Alpha and Station Beta
    Two,
    /// Station Alpha, Station Beta and Station Gamma
    Three,
}

impl StationLayout {
    pub fn stations(self) -> Vec<StationConfig> {
        let names: &[&str] = match self {
            StationLayout::Two => &["Station Alpha", "Station Beta"],
            StationLayout::Three => &["Station Alpha", "Station Beta", "Station Gamma"],
        };
        names
            .iter()
            .enumerate()
            .map(|(i, name)| StationConfig::new(i as u32 + 1, *name))
            .collect()
    }
}

impl Settings {
    /// Replace the configured stations with a built-in layout.
    pub fn with_layout(mut self, layout: StationLayout) -> Self {
        self.stations = layout.stations();
        self
    }

    /// Effective abnormal threshold for a station.
    pub fn threshold_for(&self, station: &StationConfig) -> f64 {
        station.threshold.unwrap_or(self.alerts.default_threshold)
    }
}

fn default_stations() -> Vec<StationConfig> {
    StationLayout::Three.stations()
}

fn default_base_temperature() -> f64 {
    25.0
}

fn default_variation() -> f64 {
    5.0
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_history_capacity() -> usize {
    100
}

fn default_threshold() -> f64 {
    26.0
}

fn default_cold_below() -> f64 {
    20.0
}

fn default_refresh_ms() -> u64 {
    1000
}

fn default_chart_min() -> f64 {
    -20.0
}

fn default_chart_max() -> f64 {
    40.0
}
