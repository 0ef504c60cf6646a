use crate::channel::Notification;
use crate::player::Track;

/// What the transport view currently believes about playback.
///
/// Updated exclusively through [`ViewState::apply`]; in particular the
/// playing flag (which gates the progress-polling loop) is never inferred
/// from local timers or key presses, only from notifications.
#[derive(Debug, Default)]
pub struct ViewState {
    pub track: Option<Track>,
    pub playing: bool,
    pub elapsed_ms: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one notification into the view state.
    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::PlayOrPauseChanged(playing) => {
                self.playing = *playing;
            }
            Notification::ProgressReport(elapsed_ms) => {
                self.elapsed_ms = *elapsed_ms;
            }
            Notification::SongChanged(track) => {
                self.track = Some(track.clone());
                self.elapsed_ms = 0;
            }
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.track.as_ref().map(|t| t.duration_ms).unwrap_or(0)
    }

    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms().saturating_sub(self.elapsed_ms)
    }
}

/// Format milliseconds as `M:SS` with unbounded minutes.
pub fn format_mmss(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
