//! UI rendering helpers for the terminal transport view.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::config::{ControlsSettings, UiSettings};
use crate::view::{ViewState, format_mmss};

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[space/p] play/pause".to_string(),
        format!("[h/l] scrub -/+{}s", scrub_seconds),
        "[0] restart".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Fraction of the track played, clamped into `[0, 1]`.
fn progress_ratio(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    (elapsed_ms as f64 / duration_ms as f64).clamp(0.0, 1.0)
}

/// Build the elapsed/total/remaining time line.
fn time_text(view: &ViewState) -> String {
    format!(
        "{} / {} (-{})",
        format_mmss(view.elapsed_ms),
        format_mmss(view.duration_ms()),
        format_mmss(view.remaining_ms()),
    )
}

/// Render the entire UI into the provided `frame` from the view state.
pub fn draw(
    frame: &mut Frame,
    view: &ViewState,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" adagio ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track box
    let track_text = match &view.track {
        Some(track) => {
            let state = if view.playing { "Playing" } else { "Paused" };
            format!(
                "Title: {}\nArtist: {}\nAlbum: {}\nState: {}",
                track.title, track.artist, track.album, state
            )
        }
        None => "Loading...".to_string(),
    };
    let track_par = Paragraph::new(track_text)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" song "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(track_par, chunks[1]);

    // Progress gauge
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
        .ratio(progress_ratio(view.elapsed_ms, view.duration_ms()))
        .label(time_text(view));
    frame.render_widget(gauge, chunks[2]);

    // Footer
    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" controls ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(footer, chunks[4]);
}
