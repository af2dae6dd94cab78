use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, ScoreboardStore};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::scoreboard::ScoreboardState;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Build the store, take over the terminal and run until quit or signal.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let initial_matches = usize::from(config.scoreboard.initial_matches);
    let store = ScoreboardStore::new(ScoreboardState::with_matches(initial_matches));
    let mut app = App::new(store);
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone())?;
    tracing::info!(initial_matches, "Scoreboard started");

    let result = loop {
        if app.take_redraw() {
            if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
                break Err(err);
            }
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break Ok(());
        }

        match handle_event(&mut app, events.next(tick_rate)) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    shutdown.signal();
    drop(guard);
    match &result {
        Ok(()) => tracing::info!(matches = app.state().len(), "Scoreboard exited"),
        Err(err) => tracing::error!(error = %err, "Scoreboard stopped on terminal error"),
    }
    result
}

fn handle_event(
    app: &mut App,
    event: Result<AppEvent, RecvTimeoutError>,
) -> io::Result<LoopControl> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Resize) => app.request_redraw(),
        Ok(AppEvent::Error(err)) => return Err(err),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => return Ok(LoopControl::Exit),
    }
    Ok(LoopControl::Continue)
}
