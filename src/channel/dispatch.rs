use std::sync::mpsc::{self, Receiver, Sender};

use crate::player::PlayerController;

use super::messages::{Command, Notification};

/// Routes commands to the controller and fans notifications out to
/// subscribers.
///
/// The channel is the sole owner of the [`PlayerController`]; each command
/// is processed to completion before the next, so no partial mutation is
/// ever observable.
pub struct ControlChannel {
    controller: PlayerController,
    subscribers: Vec<Sender<Notification>>,
}

impl ControlChannel {
    pub fn new(controller: PlayerController) -> Self {
        Self {
            controller,
            subscribers: Vec::new(),
        }
    }

    /// Register a view; every subsequent notification arrives on the
    /// returned receiver in emission order.
    pub fn subscribe(&mut self) -> Receiver<Notification> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Startup handshake: optionally start playback, then announce the
    /// playing flag and the loaded track, in that order.
    pub fn begin(&mut self, autoplay: bool) {
        let playing = if autoplay {
            self.controller.play()
        } else {
            self.controller.is_playing()
        };
        self.notify(Notification::PlayOrPauseChanged(playing));
        let track = self.controller.track().clone();
        self.notify(Notification::SongChanged(track));
    }

    /// Process one command and push whatever notifications it produces.
    pub fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::PlayOrPause => {
                let playing = self.controller.toggle();
                self.notify(Notification::PlayOrPauseChanged(playing));
            }
            Command::Pause => {
                let playing = self.controller.pause();
                self.notify(Notification::PlayOrPauseChanged(playing));
            }
            Command::Goto { time_ms } => {
                self.controller.seek(time_ms);
            }
            Command::QueryProgress => {
                let was_playing = self.controller.is_playing();
                let elapsed = self.controller.progress();
                self.notify(Notification::ProgressReport(elapsed));
                // The reading may have hit end-of-track; the resulting pause
                // must reach the views after the report itself.
                if was_playing && !self.controller.is_playing() {
                    self.notify(Notification::PlayOrPauseChanged(false));
                }
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        // A failed send means the subscriber is gone; prune it.
        self.subscribers
            .retain(|tx| tx.send(notification.clone()).is_ok());
    }
}
