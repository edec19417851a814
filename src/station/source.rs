// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Temperature sources sampled by station workers.
//!
//! A source only produces raw values in °C; rounding, timestamping and
//! history management happen in the station.

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SourceConfig;
use crate::error::{Result, TempwatchError};

/// Something that can be asked for the current temperature.
pub trait TemperatureSource: Send {
    /// Take one sample in °C.
    fn sample(&mut self) -> Result<f64>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Build the source described by a station's configuration.
pub fn from_config(config: &SourceConfig) -> Box<dyn TemperatureSource> {
    match config {
        SourceConfig::Simulated {
            base,
            variation,
            seed,
        } => {
            let source = match seed {
                Some(seed) => SimulatedSource::seeded(*base, *variation, *seed),
                None => SimulatedSource::new(*base, *variation),
            };
            Box::new(source)
        }
        SourceConfig::Sysfs { path } => Box::new(SysfsSource::new(path.clone())),
    }
}

/// Uniformly distributed readings in `base ± variation`.
pub struct SimulatedSource {
    base: f64,
    variation: f64,
    rng: StdRng,
}

impl SimulatedSource {
    pub fn new(base: f64, variation: f64) -> Self {
        Self {
            base,
            variation,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(base: f64, variation: f64, seed: u64) -> Self {
        Self {
            base,
            variation,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TemperatureSource for SimulatedSource {
    fn sample(&mut self) -> Result<f64> {
        let (low, high) = (self.base - self.variation, self.base + self.variation);
        if !low.is_finite() || !high.is_finite() || !(self.variation * 2.0).is_finite() {
            return Err(TempwatchError::Source(format!(
                "simulated range {}±{} is not finite",
                self.base, self.variation
            )));
        }
        if self.variation <= 0.0 {
            return Ok(self.base);
        }
        let offset = self.rng.random_range(-self.variation..=self.variation);
        Ok(self.base + offset)
    }

    fn describe(&self) -> String {
        format!("simulated {}±{}°C", self.base, self.variation)
    }
}

/// Reads a Linux thermal zone style file.
pub struct SysfsSource {
    path: PathBuf,
}

impl SysfsSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TemperatureSource for SysfsSource {
    fn sample(&mut self) -> Result<f64> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            TempwatchError::Source(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        parse_thermal_zone_temp(&raw).ok_or_else(|| {
            TempwatchError::Source(format!(
                "unparseable reading {:?} from {}",
                raw.trim(),
                self.path.display()
            ))
        })
    }

    fn describe(&self) -> String {
        format!("sysfs {}", self.path.display())
    }
}

/// Thermal zones report millidegrees; plain Celsius values are passed through.
pub fn parse_thermal_zone_temp(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.abs() > 1000.0 {
        Some(value / 1000.0)
    } else {
        Some(value)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
pub struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl TemperatureSource for ScriptedSource {
    fn sample(&mut self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(TempwatchError::Source("scripted source is empty".into()));
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        Ok(value)
    }

    fn describe(&self) -> String {
        format!("scripted ({} values)", self.values.len())
    }
}
