use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal size changed; the next frame is drawn at the new size.
    Resize,
    /// Polling or reading the terminal failed. The input thread stops after
    /// sending this.
    Error(io::Error),
}

/// Reads terminal input on a background thread and forwards it over a
/// channel. The thread never touches application state.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                let ready = match event::poll(poll_interval) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        let _ = tx.send(AppEvent::Error(err));
                        break;
                    }
                };
                if !ready {
                    continue;
                }

                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        let _ = tx.send(AppEvent::Error(err));
                        break;
                    }
                };
                if forwarded.is_err() {
                    // Receiver dropped: the UI loop has exited.
                    break;
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
