// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Headless monitoring: print every station's status on each refresh tick.

use std::time::Duration;

use chrono::Local;

use crate::cli::args::{OutputFormat, WatchArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::monitor::Monitor;
use crate::station::StationStatus;

/// Execute the watch command
pub async fn execute(args: &WatchArgs, settings: Settings) -> Result<()> {
    let settings = super::select_stations(settings, &args.stations)?;
    let monitor = Monitor::from_settings(&settings)?;
    monitor.start_all()?;
    tracing::info!(stations = monitor.len(), "watching");

    let mut ticker = tokio::time::interval(Duration::from_millis(settings.dashboard.refresh_ms));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let stop_after = wait_for(args.duration);
    tokio::pin!(stop_after);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for status in monitor.statuses() {
                    println!("{}", render_status(&status, args.format)?);
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted");
                break;
            }
            _ = &mut stop_after => break,
        }
    }

    monitor.stop_all()
}

/// Sleep for `secs`, or forever when no duration was given.
pub(crate) async fn wait_for(secs: Option<u64>) {
    match secs {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => std::future::pending::<()>().await,
    }
}

/// One output line for a station.
pub fn render_status(status: &StationStatus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(status)?),
        OutputFormat::Text => Ok(format_status_line(status)),
    }
}

fn format_status_line(status: &StationStatus) -> String {
    let state = if status.is_running { "active" } else { "inactive" };
    let reading = match (status.current_temperature, status.class) {
        (Some(temp), Some(class)) => format!("{:>7.2}°C  {:<8}", temp, class.label()),
        _ => format!("{:>9}  {:<8}", "no data", ""),
    };
    format!(
        "[{}] {:<16} {:<8} {} ({} readings)",
        Local::now().format("%H:%M:%S"),
        status.name,
        state,
        reading,
        status.readings_count
    )
}
