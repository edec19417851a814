// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the dashboard
//!
//! One column per station, each with controls/status, the current reading,
//! a trend chart with the threshold line and summary statistics.

use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Wrap},
};

use super::app::App;
use super::input::HELP_TEXT;
use crate::export::format_temperature;
use crate::station::{Reading, StationStatus, Stats, TemperatureClass};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Stations
            Constraint::Length(3), // Status/Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);
    draw_stations(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Draw the title bar
fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let running = app
        .monitor
        .stations()
        .iter()
        .filter(|s| s.is_running())
        .count();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Line::from(vec![
        Span::styled(
            " Temperature Detection System ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}/{} active", running, app.monitor.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Draw the status bar
fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(ref msg) = app.status_message {
        let color = if app.status_is_error {
            Color::Red
        } else {
            Color::Green
        };
        (msg.clone(), Style::default().fg(color))
    } else {
        (
            "←→: Select | s/x: Start/Stop | e: Export | ?: Help | q: Quit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(format!(" {} ", text))
        .style(style)
        .block(block);

    frame.render_widget(status, area);
}

/// Split the body into equal columns, one per station
fn draw_stations(frame: &mut Frame, area: Rect, app: &App) {
    let stations = app.monitor.stations();
    if stations.is_empty() {
        let empty = Paragraph::new("No stations configured")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let count = stations.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (i, station) in stations.iter().enumerate() {
        let view = StationView {
            status: station.status(),
            history: station.history(),
            stats: station.stats(),
            selected: i == app.selected,
            chart_bounds: [app.settings.dashboard.chart_min, app.settings.dashboard.chart_max],
        };
        draw_station(frame, columns[i], &view);
    }
}

/// Snapshot of one station taken for a single frame
struct StationView {
    status: StationStatus,
    history: Vec<Reading>,
    stats: Option<Stats>,
    selected: bool,
    chart_bounds: [f64; 2],
}

fn draw_station(frame: &mut Frame, area: Rect, view: &StationView) {
    let border_style = if view.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", view.status.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Running state
            Constraint::Length(1), // Current reading
            Constraint::Length(1), // Readings count
            Constraint::Min(4),    // Chart
            Constraint::Length(1), // Stats
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(running_line(&view.status)), rows[0]);
    frame.render_widget(Paragraph::new(reading_line(&view.status)), rows[1]);
    frame.render_widget(
        Paragraph::new(format!("Readings: {}", view.status.readings_count))
            .style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
    draw_chart(frame, rows[3], view);
    frame.render_widget(Paragraph::new(stats_line(view.stats.as_ref())), rows[4]);
}

fn running_line(status: &StationStatus) -> Line<'static> {
    if status.is_running {
        Line::from(Span::styled(
            "● Active",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "○ Inactive",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    }
}

pub(crate) fn class_color(class: TemperatureClass) -> Color {
    match class {
        TemperatureClass::Abnormal => Color::Red,
        TemperatureClass::Cold => Color::Blue,
        TemperatureClass::Normal => Color::Green,
    }
}

fn reading_line(status: &StationStatus) -> Line<'static> {
    match (status.current_temperature, status.class) {
        (Some(temp), Some(class)) => {
            let color = class_color(class);
            let label = match class {
                TemperatureClass::Abnormal => {
                    format!("{} {} (>{}°C)", class.symbol(), class.label(), status.threshold)
                }
                _ => format!("{} {}", class.symbol(), class.label()),
            };
            Line::from(vec![
                Span::styled(
                    format!("{}°C ", format_temperature(temp)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(label, Style::default().fg(color)),
            ])
        }
        _ => Line::from(Span::styled("No data", Style::default().fg(Color::Gray))),
    }
}

pub(crate) fn format_stats(stats: Option<&Stats>) -> String {
    match stats {
        Some(stats) => format!(
            "Avg {:.1}°C  Min {:.1}°C  Max {:.1}°C",
            stats.average, stats.min, stats.max
        ),
        None => "Avg --°C  Min --°C  Max --°C".to_string(),
    }
}

fn stats_line(stats: Option<&Stats>) -> Line<'static> {
    Line::from(Span::styled(
        format_stats(stats),
        Style::default().fg(Color::Gray),
    ))
}

fn draw_chart(frame: &mut Frame, area: Rect, view: &StationView) {
    if view.history.is_empty() {
        let placeholder = Paragraph::new("No data available\nStart this station to see trends")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    }

    let points: Vec<(f64, f64)> = view
        .history
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.temperature))
        .collect();
    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
    let threshold = view.status.threshold;
    let threshold_points = [(0.0, threshold), (x_max, threshold)];

    let datasets = vec![
        Dataset::default()
            .name("Temperature")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .name(format!("Threshold {}°C", threshold))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&threshold_points),
    ];

    let time_label = |reading: Option<&Reading>| {
        reading
            .map(|r| r.timestamp.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    };
    let [y_min, y_max] = view.chart_bounds;

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels([
                    Span::raw(time_label(view.history.first())),
                    Span::raw(time_label(view.history.last())),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("°C")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels([
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = HELP_TEXT
        .split(" | ")
        .map(|entry| Line::from(format!("  {}", entry)))
        .collect();

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keys (any key to close) "),
    );
    frame.render_widget(popup, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
