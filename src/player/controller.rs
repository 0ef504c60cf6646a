use super::clock::Clock;
use super::track::Track;

/// Owns the playback state for the single loaded track.
///
/// Elapsed time is kept as `accumulated_ms` (the value frozen at the last
/// pause or seek) plus, while playing, the clock time since `started_at_ms`.
/// Every operation is O(1), synchronous and total; there is no error path.
pub struct PlayerController {
    track: Track,
    playing: bool,
    // Elapsed milliseconds frozen at the last pause/seek.
    accumulated_ms: u64,
    // Clock reading when playback last (re)started; `Some` iff playing.
    started_at_ms: Option<u64>,
    clock: Box<dyn Clock>,
}

impl PlayerController {
    /// Create a paused controller at elapsed 0 with `track` loaded.
    pub fn new(track: Track, clock: Box<dyn Clock>) -> Self {
        Self {
            track,
            playing: false,
            accumulated_ms: 0,
            started_at_ms: None,
            clock,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start (or keep) playback; elapsed continues from its current value.
    ///
    /// Idempotent: calling while already playing changes nothing but still
    /// returns `true` so callers can re-affirm state to their views.
    pub fn play(&mut self) -> bool {
        if !self.playing {
            self.started_at_ms = Some(self.clock.now_ms());
            self.playing = true;
        }
        true
    }

    /// Stop advancing; elapsed freezes at its current value. Returns `false`.
    pub fn pause(&mut self) -> bool {
        if self.playing {
            self.accumulated_ms = self.elapsed_now();
            self.started_at_ms = None;
            self.playing = false;
        }
        false
    }

    /// Pause if playing, play if paused. Returns the resulting playing flag.
    pub fn toggle(&mut self) -> bool {
        if self.playing { self.pause() } else { self.play() }
    }

    /// Make elapsed equal `target_ms` as of now, preserving the playing flag.
    ///
    /// Targets beyond the track length are clamped to `duration_ms`; the
    /// lower bound holds by construction. Emits nothing: callers that need
    /// a fresh reading re-query progress.
    pub fn seek(&mut self, target_ms: u64) {
        self.accumulated_ms = target_ms.min(self.track.duration_ms);
        if self.playing {
            self.started_at_ms = Some(self.clock.now_ms());
        }
    }

    /// Current elapsed milliseconds, safe to call in either state.
    ///
    /// End-of-track detection lives here: when a reading reaches the track
    /// duration while playing, the controller pauses itself and freezes
    /// elapsed at that reading. Detection is polling-driven, so it happens
    /// on the next query rather than the instant the track ends.
    pub fn progress(&mut self) -> u64 {
        let elapsed = self.elapsed_now();
        if self.playing && elapsed >= self.track.duration_ms {
            self.accumulated_ms = elapsed;
            self.started_at_ms = None;
            self.playing = false;
        }
        elapsed
    }

    fn elapsed_now(&self) -> u64 {
        match self.started_at_ms {
            Some(started) => self.accumulated_ms + self.clock.now_ms().saturating_sub(started),
            None => self.accumulated_ms,
        }
    }
}
