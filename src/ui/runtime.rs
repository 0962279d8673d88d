use crate::config::Config;
use crate::omdb::MovieLookup;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{spawn_lookup_worker, COMMAND_CHANNEL_SIZE};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Run the TUI until the user quits.
///
/// The UI loop runs on the calling thread; lookups run on `runtime`.
pub fn run(config: &Config, lookup: Arc<dyn MovieLookup>, runtime: &Handle) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate)?;

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let worker = spawn_lookup_worker(runtime, lookup, command_rx, events.sender());

    let mut app = App::new(command_tx);
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel and ends the worker.
    drop(app);
    worker.abort();
    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}

/// Apply one event to the app.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        // ratatui picks up the new size on the next draw.
        AppEvent::Resize(_, _) => {}
        AppEvent::LookupFinished(outcome) => app.on_lookup_finished(outcome),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, quitting");
            app.request_quit();
        }
    }
}
