// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sample every station for a fixed time, then write one CSV per station.

use std::path::PathBuf;

use crate::cli::args::ExportArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::monitor::Monitor;

/// Execute the export command, returning the files written.
pub async fn execute(args: &ExportArgs, settings: Settings) -> Result<Vec<PathBuf>> {
    let out_dir = args.out.clone().unwrap_or_else(|| settings.export_dir());
    let monitor = Monitor::from_settings(&settings)?;

    monitor.start_all()?;
    tracing::info!(seconds = args.duration, "sampling before export");
    tokio::select! {
        _ = super::watch::wait_for(Some(args.duration)) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, exporting what was collected");
        }
    }
    monitor.stop_all()?;

    let written = monitor.export_all(&out_dir)?;
    if written.is_empty() {
        println!("No data to export");
    }
    for path in &written {
        println!("{}", path.display());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationLayout;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_writes_one_file_per_station() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = Settings::default().with_layout(StationLayout::Two);
        settings.sampling.interval_ms = 10;

        let args = ExportArgs {
            duration: 0,
            out: Some(temp_dir.path().to_path_buf()),
        };
        let written = execute(&args, settings).await.unwrap();

        // Each station samples once immediately on start
        assert_eq!(written.len(), 2);
        for path in written {
            let content = std::fs::read_to_string(path).unwrap();
            assert!(content.starts_with("Timestamp,Temperature_Celsius,Station_Name,Station_ID"));
        }
    }
}
