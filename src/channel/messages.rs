use crate::player::Track;

/// A view-to-controller message requesting a state change or a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle between playing and paused.
    PlayOrPause,
    /// Pause unconditionally.
    Pause,
    /// Move elapsed time to `time_ms`. Produces no notification; senders
    /// that need the new reading follow up with `QueryProgress`.
    Goto { time_ms: u64 },
    /// Ask for the current elapsed time; may trigger the end-of-track pause.
    QueryProgress,
}

/// A controller-to-view message reporting a state change or query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The playing flag after play, pause, toggle or auto-pause. Views start
    /// and stop their progress polling from this and nothing else.
    PlayOrPauseChanged(bool),
    /// Elapsed milliseconds, in direct response to `QueryProgress`.
    ProgressReport(u64),
    /// Metadata of the loaded track, sent once during the startup handshake.
    SongChanged(Track),
}
