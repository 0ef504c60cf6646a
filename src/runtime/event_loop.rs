use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::channel::{Command, ControlChannel, Notification};
use crate::config;
use crate::mpris::MprisHandle;
use crate::ui;
use crate::view::ViewState;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// When the last progress query was issued.
    pub last_poll: Instant,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            last_poll: Instant::now(),
        }
    }
}

/// Main terminal event loop: drains commands into the control channel,
/// folds notifications into the view (and MPRIS), polls progress while
/// playing and handles input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    view: &mut ViewState,
    channel: &mut ControlChannel,
    mpris: &MprisHandle,
    command_tx: &Sender<Command>,
    command_rx: &Receiver<Command>,
    notifications: &Receiver<Notification>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_interval = Duration::from_millis(settings.ui.poll_interval_ms.max(1));

    loop {
        // Commands from all views (keyboard and MPRIS) funnel through one
        // mpsc; each is handled to completion before the next.
        while let Ok(cmd) = command_rx.try_recv() {
            channel.handle(cmd);
        }

        while let Ok(n) = notifications.try_recv() {
            apply_notification(view, mpris, &n);
        }

        // Progress polling is gated on the playing flag as the channel last
        // announced it, never on local input state.
        if view.playing && state.last_poll.elapsed() >= poll_interval {
            let _ = command_tx.send(Command::QueryProgress);
            state.last_poll = Instant::now();
        }

        terminal.draw(|f| ui::draw(f, view, &settings.ui, &settings.controls))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, view, command_tx) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn apply_notification(view: &mut ViewState, mpris: &MprisHandle, n: &Notification) {
    view.apply(n);
    match n {
        Notification::PlayOrPauseChanged(playing) => mpris.set_playing(*playing),
        Notification::ProgressReport(elapsed_ms) => mpris.set_elapsed(*elapsed_ms),
        Notification::SongChanged(track) => mpris.set_track(Some(track.clone())),
    }
}

/// Returns `true` when the loop should shut down.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    view: &ViewState,
    command_tx: &Sender<Command>,
) -> bool {
    let scrub_ms = settings.controls.scrub_seconds.saturating_mul(1_000);

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            let _ = command_tx.send(Command::PlayOrPause);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            scrub_to(command_tx, view.elapsed_ms.saturating_sub(scrub_ms));
        }
        KeyCode::Char('l') | KeyCode::Right => {
            scrub_to(command_tx, view.elapsed_ms.saturating_add(scrub_ms));
        }
        KeyCode::Char('0') => {
            scrub_to(command_tx, 0);
        }
        _ => {}
    }

    false
}

/// A manual seek is pause, goto, toggle, in that order, so playback resumes
/// afterwards; the trailing toggle re-emits the playing flag the polling
/// loop keys off of.
fn scrub_to(command_tx: &Sender<Command>, target_ms: u64) {
    let _ = command_tx.send(Command::Pause);
    let _ = command_tx.send(Command::Goto { time_ms: target_ms });
    let _ = command_tx.send(Command::PlayOrPause);
}
