// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::collections::HashSet;

use crate::error::{Result, TempwatchError};

use super::{Settings, SourceConfig};

impl Settings {
    /// Check the settings for values the runtime cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.stations.is_empty() {
            return Err(TempwatchError::Config(
                "at least one station must be configured".into(),
            ));
        }

        let mut seen = HashSet::new();
        for station in &self.stations {
            if !seen.insert(station.id) {
                return Err(TempwatchError::Config(format!(
                    "duplicate station id {}",
                    station.id
                )));
            }
            if station.name.trim().is_empty() {
                return Err(TempwatchError::Config(format!(
                    "station {} has an empty name",
                    station.id
                )));
            }
            if let SourceConfig::Simulated {
                base, variation, ..
            } = station.source
            {
                require_finite(&format!("station {} base", station.id), base)?;
                require_finite(&format!("station {} variation", station.id), variation)?;
                if variation < 0.0 {
                    return Err(TempwatchError::Config(format!(
                        "station {} has a negative variation",
                        station.id
                    )));
                }
                if !(base - variation).is_finite()
                    || !(base + variation).is_finite()
                    || !(variation * 2.0).is_finite()
                {
                    return Err(TempwatchError::Config(format!(
                        "station {} range {}±{} overflows",
                        station.id, base, variation
                    )));
                }
            }
            if let Some(threshold) = station.threshold {
                require_finite(&format!("station {} threshold", station.id), threshold)?;
            }
        }

        require_finite("alerts.default_threshold", self.alerts.default_threshold)?;
        require_finite("alerts.cold_below", self.alerts.cold_below)?;
        require_finite("dashboard.chart_min", self.dashboard.chart_min)?;
        require_finite("dashboard.chart_max", self.dashboard.chart_max)?;

        if self.sampling.interval_ms == 0 {
            return Err(TempwatchError::Config(
                "sampling.interval_ms must be greater than zero".into(),
            ));
        }
        if self.sampling.history_capacity == 0 {
            return Err(TempwatchError::Config(
                "sampling.history_capacity must be greater than zero".into(),
            ));
        }
        if self.dashboard.refresh_ms == 0 {
            return Err(TempwatchError::Config(
                "dashboard.refresh_ms must be greater than zero".into(),
            ));
        }
        if self.alerts.cold_below >= self.alerts.default_threshold {
            return Err(TempwatchError::Config(format!(
                "alerts.cold_below ({}) must be below alerts.default_threshold ({})",
                self.alerts.cold_below, self.alerts.default_threshold
            )));
        }
        if self.dashboard.chart_min >= self.dashboard.chart_max {
            return Err(TempwatchError::Config(
                "dashboard.chart_min must be below dashboard.chart_max".into(),
            ));
        }

        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TempwatchError::Config(format!(
            "{} must be a finite number, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationConfig;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_station_list() {
        let mut settings = Settings::default();
        settings.stations.clear();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("at least one station"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut settings = Settings::default();
        settings.stations.push(StationConfig::new(1, "Duplicate"));
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate station id 1"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut settings = Settings::default();
        settings.stations[0].name = "   ".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_interval_and_capacity() {
        let mut settings = Settings::default();
        settings.sampling.interval_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.sampling.history_capacity = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_alert_bounds() {
        let mut settings = Settings::default();
        settings.alerts.cold_below = 30.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_chart_bounds() {
        let mut settings = Settings::default();
        settings.dashboard.chart_min = 50.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_variation() {
        let mut settings = Settings::default();
        settings.stations[0].source = SourceConfig::Simulated {
            base: 25.0,
            variation: -1.0,
            seed: None,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_simulated_range() {
        for (base, variation) in [
            (25.0, f64::INFINITY),
            (25.0, f64::NAN),
            (f64::NAN, 5.0),
            (f64::NEG_INFINITY, 5.0),
            (f64::MAX, f64::MAX),
            (0.0, f64::MAX),
        ] {
            let mut settings = Settings::default();
            settings.stations[0].source = SourceConfig::Simulated {
                base,
                variation,
                seed: None,
            };
            assert!(
                settings.validate().is_err(),
                "accepted base={} variation={}",
                base,
                variation
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_thresholds_and_bounds() {
        let mut settings = Settings::default();
        settings.stations[0].threshold = Some(f64::NAN);
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("station 1 threshold"));

        let mut settings = Settings::default();
        settings.alerts.default_threshold = f64::INFINITY;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.alerts.cold_below = f64::NEG_INFINITY;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.dashboard.chart_max = f64::INFINITY;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.dashboard.chart_min = f64::NAN;
        assert!(settings.validate().is_err());
    }
}
