use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::app::LookupOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A lookup finished, successfully or not. Tagged with the fetch
    /// generation it was issued for.
    LookupFinished(LookupOutcome),
    /// The input thread stopped. No more keys will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread.
    ///
    /// The thread exits once the receiving side is dropped or the
    /// terminal stops delivering events, sending `InputClosed` in the
    /// latter case.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(&event_tx, tick_rate, event::poll, event::read))?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward terminal events and ticks until the receiver is gone or the
/// terminal fails.
fn input_loop<P, R>(tx: &Sender<AppEvent>, tick_rate: Duration, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        match poll(timeout) {
            Ok(true) => {
                let forwarded = match read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        let _ = tx.send(AppEvent::InputClosed);
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
