// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bounded reading history with summary statistics.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;

/// A single timestamped temperature reading in °C.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub timestamp: DateTime<Local>,
    pub temperature: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Local>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }
}

/// Average, minimum and maximum over a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Readings ordered oldest first, evicting the oldest once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct History {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, reading: Reading) {
        if self.readings.len() >= self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn to_vec(&self) -> Vec<Reading> {
        self.readings.iter().cloned().collect()
    }

    pub fn stats(&self) -> Option<Stats> {
        stats_of(self.readings.iter())
    }
}

/// Compute stats over any sequence of readings; `None` when empty.
pub fn stats_of<'a>(readings: impl IntoIterator<Item = &'a Reading>) -> Option<Stats> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for reading in readings {
        count += 1;
        sum += reading.temperature;
        min = min.min(reading.temperature);
        max = max.max(reading.temperature);
    }

    if count == 0 {
        return None;
    }

    Some(Stats {
        average: sum / count as f64,
        min,
        max,
        count,
    })
}
