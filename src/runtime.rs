//! Process wiring: builds the controller and channel, owns the terminal and
//! runs the event loop.

use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::channel::{Command, ControlChannel};
use crate::mpris;
use crate::player::{PlayerController, SystemClock};
use crate::view::ViewState;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    // One controller per process, owned by the channel for its whole life.
    let controller = PlayerController::new(settings.track.to_track(), Box::new(SystemClock::new()));
    let mut channel = ControlChannel::new(controller);
    let notifications = channel.subscribe();
    let mut view = ViewState::new();

    let (command_tx, command_rx) = mpsc::channel::<Command>();
    let mpris = mpris::spawn_mpris(command_tx.clone());

    // Startup handshake: the view exists at this point, so announce the
    // track and (by default) start playing.
    channel.begin(settings.playback.autoplay);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut view,
            &mut channel,
            &mpris,
            &command_tx,
            &command_rx,
            &notifications,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
