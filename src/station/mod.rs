// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Temperature detection stations
//!
//! Each station owns a temperature source and samples it on a dedicated
//! worker thread while running. Readings land in a bounded history that the
//! front-ends snapshot on their own refresh tick.
//!
//! Stations are started and stopped independently. Starting a stopped station
//! discards its previous readings; starting a running one does nothing.

pub mod history;
pub mod source;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::{Settings, StationConfig};
use crate::error::{Result, TempwatchError};
use crate::export;

pub use history::{History, Reading, Stats};
pub use source::{ScriptedSource, SimulatedSource, SysfsSource, TemperatureSource};

/// How a reading compares to the station's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureClass {
    Cold,
    Normal,
    Abnormal,
}

impl TemperatureClass {
    /// Abnormal wins over cold when the limits overlap.
    pub fn classify(temperature: f64, threshold: f64, cold_below: f64) -> Self {
        if temperature > threshold {
            TemperatureClass::Abnormal
        } else if temperature < cold_below {
            TemperatureClass::Cold
        } else {
            TemperatureClass::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureClass::Cold => "Cold",
            TemperatureClass::Normal => "Normal",
            TemperatureClass::Abnormal => "Abnormal",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureClass::Cold => "❄",
            TemperatureClass::Normal => "✓",
            TemperatureClass::Abnormal => "⚠",
        }
    }
}

/// Point-in-time view of a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStatus {
    pub station_id: u32,
    pub name: String,
    pub is_running: bool,
    pub current_temperature: Option<f64>,
    pub readings_count: usize,
    pub threshold: f64,
    pub is_abnormal: bool,
    pub class: Option<TemperatureClass>,
}

/// Tunables shared by every station built from the same settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StationOptions {
    pub threshold: f64,
    pub cold_below: f64,
    pub interval: Duration,
    pub history_capacity: usize,
}

impl Default for StationOptions {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            threshold: settings.alerts.default_threshold,
            cold_below: settings.alerts.cold_below,
            interval: Duration::from_millis(settings.sampling.interval_ms),
            history_capacity: settings.sampling.history_capacity,
        }
    }
}

impl StationOptions {
    pub fn for_station(settings: &Settings, station: &StationConfig) -> Self {
        Self {
            threshold: settings.threshold_for(station),
            cold_below: settings.alerts.cold_below,
            interval: Duration::from_millis(settings.sampling.interval_ms),
            history_capacity: settings.sampling.history_capacity,
        }
    }
}

#[derive(Debug)]
struct StationState {
    history: History,
}

struct Worker {
    handle: JoinHandle<()>,
    shutdown_tx: Sender<()>,
}

type SharedSource = Arc<Mutex<Box<dyn TemperatureSource>>>;

/// An independently controllable temperature sampler.
pub struct Station {
    id: u32,
    name: String,
    options: StationOptions,
    source: SharedSource,
    state: Arc<Mutex<StationState>>,
    running: Arc<AtomicBool>,
    worker: Mutex<Option<Worker>>,
}

impl std::fmt::Debug for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Station")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("options", &self.options)
            .field("running", &self.is_running())
            .finish()
    }
}

impl Station {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        options: StationOptions,
        source: Box<dyn TemperatureSource>,
    ) -> Self {
        let history = History::new(options.history_capacity);
        Self {
            id,
            name: name.into(),
            options,
            source: Arc::new(Mutex::new(source)),
            state: Arc::new(Mutex::new(StationState { history })),
            running: Arc::new(AtomicBool::new(false)),
            worker: Mutex::new(None),
        }
    }

    /// Build a station from its configuration entry.
    pub fn from_config(config: &StationConfig, settings: &Settings) -> Self {
        Self::new(
            config.id,
            config.name.clone(),
            StationOptions::for_station(settings, config),
            source::from_config(&config.source),
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> f64 {
        self.options.threshold
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start sampling. Clears previous readings. No-op while already running.
    pub fn start(&self) -> Result<()> {
        let mut worker = lock(&self.worker)?;
        if worker.is_some() {
            return Ok(());
        }

        {
            let mut state = lock(&*self.state)?;
            state.history.clear();
        }

        let source = lock(&*self.source)?.describe();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        self.running.store(true, Ordering::SeqCst);

        let ctx = WorkerContext {
            name: self.name.clone(),
            interval: self.options.interval,
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        };
        let spawned = thread::Builder::new()
            .name(format!("station-{}", self.id))
            .spawn(move || {
                loop {
                    ctx.sample();
                    match shutdown_rx.recv_timeout(ctx.interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!(station = %ctx.name, "worker exited");
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(TempwatchError::Station(format!(
                    "failed to spawn worker for {}: {}",
                    self.name, e
                )));
            }
        };

        *worker = Some(Worker {
            handle,
            shutdown_tx,
        });
        tracing::info!(station = %self.name, id = self.id, %source, "detection started");
        Ok(())
    }

    /// Stop sampling and wait for the worker to exit. Readings are kept.
    pub fn stop(&self) -> Result<()> {
        let taken = lock(&self.worker)?.take();
        self.running.store(false, Ordering::SeqCst);

        if let Some(worker) = taken {
            let _ = worker.shutdown_tx.send(());
            worker.handle.join().map_err(|_| {
                TempwatchError::Station(format!("worker for {} panicked", self.name))
            })?;
            tracing::info!(station = %self.name, id = self.id, "detection stopped");
        }
        Ok(())
    }

    /// Take one sample right now on the calling thread and record it.
    pub fn sample_now(&self) -> Result<f64> {
        let raw = lock(&*self.source)?.sample()?;
        let temperature = checked_temperature(raw)?;
        record(&self.state, temperature)?;
        Ok(temperature)
    }

    pub fn current_temperature(&self) -> Option<f64> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.history.latest().map(|r| r.temperature))
    }

    /// Copy of the readings, oldest first.
    pub fn history(&self) -> Vec<Reading> {
        self.state
            .lock()
            .map(|state| state.history.to_vec())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> Option<Stats> {
        self.state.lock().ok().and_then(|state| state.history.stats())
    }

    pub fn status(&self) -> StationStatus {
        let (current, count) = self
            .state
            .lock()
            .map(|state| {
                let current = state.history.latest().map(|r| r.temperature);
                (current, state.history.len())
            })
            .unwrap_or((None, 0));

        let class = current
            .map(|t| TemperatureClass::classify(t, self.options.threshold, self.options.cold_below));

        StationStatus {
            station_id: self.id,
            name: self.name.clone(),
            is_running: self.is_running(),
            current_temperature: current,
            readings_count: count,
            threshold: self.options.threshold,
            is_abnormal: class == Some(TemperatureClass::Abnormal),
            class,
        }
    }

    /// History as CSV text with a header row.
    pub fn export_csv(&self) -> Result<String> {
        let state = lock(&*self.state)?;
        export::encode_csv(state.history.iter(), &self.name, self.id)
    }

    pub fn export_filename(&self, now: DateTime<Local>) -> String {
        export::export_filename(&self.name, now)
    }

    /// Write the history to a timestamped CSV file in `dir`.
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf> {
        if self.status().readings_count == 0 {
            return Err(TempwatchError::Export(format!(
                "no data to export for {}",
                self.name
            )));
        }
        let csv = self.export_csv()?;
        let path = export::write_export(dir, &self.export_filename(Local::now()), &csv)?;
        tracing::info!(station = %self.name, path = %path.display(), "exported readings");
        Ok(path)
    }
}

impl Drop for Station {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!(station = %self.name, error = %e, "failed to stop station on drop");
        }
    }
}

struct WorkerContext {
    name: String,
    interval: Duration,
    source: SharedSource,
    state: Arc<Mutex<StationState>>,
}

impl WorkerContext {
    fn sample(&self) {
        let sampled = match self.source.lock() {
            Ok(mut source) => source.sample(),
            Err(_) => Err(TempwatchError::Source("source lock poisoned".into())),
        };

        match sampled.and_then(checked_temperature) {
            Ok(temperature) => {
                if let Err(e) = record(&self.state, temperature) {
                    tracing::warn!(station = %self.name, error = %e, "failed to record reading");
                } else {
                    tracing::debug!(station = %self.name, temperature, "reading");
                }
            }
            Err(e) => {
                tracing::warn!(station = %self.name, error = %e, "sample skipped");
            }
        }
    }
}

fn record(state: &Mutex<StationState>, temperature: f64) -> Result<()> {
    let mut state = lock(state)?;
    state.history.push(Reading::new(Local::now(), temperature));
    Ok(())
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| TempwatchError::Station("station state lock poisoned".into()))
}

/// Round a raw sample, rejecting NaN and infinities.
fn checked_temperature(raw: f64) -> Result<f64> {
    if raw.is_finite() {
        Ok(round_temperature(raw))
    } else {
        Err(TempwatchError::Source(format!("non-finite reading {}", raw)))
    }
}

/// Readings are kept to two decimal places.
pub fn round_temperature(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
