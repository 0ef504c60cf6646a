//! MPRIS remote-control surface.
//!
//! A second view on the same control channel: desktop media keys and tools
//! like `playerctl` produce [`Command`]s here, and the event loop mirrors
//! notifications into [`MprisHandle`] so the exported properties stay fresh.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{OwnedValue, Value};

use crate::channel::Command;
use crate::player::Track;

#[derive(Debug, Default)]
struct SharedState {
    playing: bool,
    track: Option<Track>,
    elapsed_ms: u64,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playing(&self, playing: bool) {
        if let Ok(mut s) = self.state.lock() {
            s.playing = playing;
        }
    }

    pub fn set_track(&self, track: Option<Track>) {
        if let Ok(mut s) = self.state.lock() {
            s.track = track;
        }
    }

    pub fn set_elapsed(&self, elapsed_ms: u64) {
        if let Ok(mut s) = self.state.lock() {
            s.elapsed_ms = elapsed_ms;
        }
    }
}

struct RootIface;

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for a TUI.
    }

    fn quit(&self) {
        // The shell only quits from its own keyboard; remote quit is not
        // wired into the command set.
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "adagio"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<Command>,
    state: Arc<Mutex<SharedState>>,
}

impl PlayerIface {
    fn snapshot(&self) -> (bool, u64) {
        self.state
            .lock()
            .map(|s| (s.playing, s.elapsed_ms))
            .unwrap_or((false, 0))
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        // Single preset track; nothing to skip to.
    }

    fn previous(&self) {}

    fn play(&self) {
        // The command set only carries a toggle; send it when paused so the
        // net effect is "play".
        let (playing, _) = self.snapshot();
        if !playing {
            let _ = self.tx.send(Command::PlayOrPause);
        }
    }

    fn pause(&self) {
        let _ = self.tx.send(Command::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(Command::PlayOrPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(Command::Pause);
        let _ = self.tx.send(Command::Goto { time_ms: 0 });
        let _ = self.tx.send(Command::QueryProgress);
    }

    fn seek(&self, offset_us: i64) {
        let (_, elapsed_ms) = self.snapshot();
        let delta_ms = offset_us / 1_000;
        let target = if delta_ms < 0 {
            elapsed_ms.saturating_sub(delta_ms.unsigned_abs())
        } else {
            elapsed_ms.saturating_add(delta_ms as u64)
        };
        let _ = self.tx.send(Command::Goto { time_ms: target });
        // The seek itself emits nothing; refresh the reading.
        let _ = self.tx.send(Command::QueryProgress);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Paused";
        };
        if s.playing { "Playing" } else { "Paused" }
    }

    #[zbus(property)]
    fn position(&self) -> i64 {
        let (_, elapsed_ms) = self.snapshot();
        (elapsed_ms as i64).saturating_mul(1_000)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        // Minimal metadata so `playerctl metadata` shows something.
        let mut map = HashMap::new();

        let track = self.state.lock().ok().and_then(|s| s.track.clone());
        let Some(track) = track else {
            return map;
        };

        let fallback =
            || OwnedValue::try_from(Value::from(String::new())).expect("OwnedValue conversion");

        let title = OwnedValue::try_from(Value::from(track.title)).unwrap_or_else(|_| fallback());
        map.insert("xesam:title".to_string(), title);

        let artist =
            OwnedValue::try_from(Value::from(vec![track.artist])).unwrap_or_else(|_| fallback());
        map.insert("xesam:artist".to_string(), artist);

        let album = OwnedValue::try_from(Value::from(track.album)).unwrap_or_else(|_| fallback());
        map.insert("xesam:album".to_string(), album);

        let length_us = (track.duration_ms as i64).saturating_mul(1_000);
        if let Ok(length) = OwnedValue::try_from(Value::from(length_us)) {
            map.insert("mpris:length".to_string(), length);
        }

        map
    }
}

pub fn spawn_mpris(tx: Sender<Command>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection
                .request_name("org.mpris.MediaPlayer2.adagio")
                .await
            {
                eprintln!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface).await {
                eprintln!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                eprintln!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}
