use serde::Deserialize;

use crate::player::Track;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/adagio/config.toml` or
/// `~/.config/adagio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ADAGIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub track: TrackSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            track: TrackSettings::default(),
            playback: PlaybackSettings::default(),
            ui: UiSettings::default(),
            controls: ControlsSettings::default(),
        }
    }
}

/// The preset track loaded at startup.
///
/// There is no scanning or playlist layer; the shell plays exactly one
/// configured track per process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackSettings {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Track length in milliseconds.
    pub duration_ms: u64,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            title: "La Mer".to_string(),
            artist: "Sarah Brightman".to_string(),
            album: "Dive".to_string(),
            duration_ms: 214_000,
        }
    }
}

impl TrackSettings {
    pub fn to_track(&self) -> Track {
        Track::new(
            self.title.clone(),
            self.artist.clone(),
            self.album.clone(),
            self.duration_ms,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether playback starts as soon as the view is up.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Interval between progress queries while playing (milliseconds).
    pub poll_interval_ms: u64,

    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 15,
            header_text: " ~ adagio ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `h` / `l`.
    pub scrub_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { scrub_seconds: 5 }
    }
}
