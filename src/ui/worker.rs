//! Async side of the lookup flow.
//!
//! Receives `UiCommand`s from the UI thread and runs each lookup in its own
//! task, so a slow response never holds back a newer one. Results go back
//! to the UI loop as `AppEvent::LookupFinished`; in-flight lookups are
//! never cancelled, the viewer simply ignores superseded generations.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::omdb::MovieLookup;
use crate::ui::app::{LookupOutcome, UiCommand};
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command channel.
pub const COMMAND_CHANNEL_SIZE: usize = 32;

/// Spawn the worker on `runtime`. It ends when every command sender is dropped.
pub fn spawn_lookup_worker(
    runtime: &Handle,
    lookup: Arc<dyn MovieLookup>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let spawner = runtime.clone();
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Lookup { generation, title } => {
                    let lookup = Arc::clone(&lookup);
                    let events = events.clone();
                    spawner.spawn(async move {
                        let result = lookup.search(&title).await;
                        let outcome = LookupOutcome {
                            generation,
                            title,
                            result,
                        };
                        if events.send(AppEvent::LookupFinished(outcome)).is_err() {
                            tracing::trace!(generation, "Lookup result dropped (UI gone)");
                        }
                    });
                }
            }
        }
        tracing::debug!("Lookup worker stopped");
    })
}
