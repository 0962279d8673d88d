use crate::omdb::{LookupError, MovieSummary};
use crate::ui::mvi::Reducer;
use crate::ui::selector::{SelectorIntent, SelectorReducer, SelectorState};
use crate::ui::viewer::{DetailViewerState, ViewerIntent, ViewerReducer};
use tokio::sync::mpsc;

/// Requests sent from the UI thread to the async lookup worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Lookup { generation: u64, title: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Result of one lookup, tagged with the generation it was issued for.
#[derive(Debug)]
pub struct LookupOutcome {
    pub generation: u64,
    pub title: String,
    pub result: Result<MovieSummary, LookupError>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Parent of the selector and the detail viewer.
///
/// Data flows one way: after every selector transition the committed
/// title is handed to the viewer, which starts a fetch only when the
/// title actually changed.
pub struct App {
    should_quit: bool,
    selector: SelectorState,
    viewer: DetailViewerState,
    lookup_sender: UiCommandSender,
}

impl App {
    pub fn new(lookup_sender: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            selector: SelectorState::default(),
            viewer: DetailViewerState::default(),
            lookup_sender,
        }
    }

    /// First activation: deliver the initial title to the viewer.
    pub fn mount(&mut self) {
        self.sync_viewer();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn viewer(&self) -> &DetailViewerState {
        &self.viewer
    }

    pub fn on_tick(&mut self) {
        self.dispatch_viewer(ViewerIntent::AnimationTick);
    }

    /// Apply a selector intent, then pass the committed title down.
    pub fn on_selector_intent(&mut self, intent: SelectorIntent) {
        self.dispatch_selector(intent);
        self.sync_viewer();
    }

    /// Feed a finished lookup into the viewer.
    ///
    /// Results for a superseded generation are dropped here, with a
    /// debug line only.
    pub fn on_lookup_finished(&mut self, outcome: LookupOutcome) {
        let LookupOutcome {
            generation,
            title,
            result,
        } = outcome;

        if !self.viewer.accepts(generation) {
            tracing::debug!(
                generation,
                current_generation = self.viewer.generation,
                title = %title,
                "Discarding stale lookup result"
            );
            return;
        }

        let intent = match result {
            Ok(summary) => {
                tracing::info!(
                    title = %title,
                    external_id = %summary.external_id,
                    "Movie loaded"
                );
                ViewerIntent::FetchSucceeded {
                    generation,
                    summary,
                }
            }
            Err(err) => {
                tracing::warn!(
                    title = %title,
                    error_type = err.error_type(),
                    error = %err,
                    "Movie lookup failed"
                );
                ViewerIntent::FetchFailed {
                    generation,
                    failure: err.to_failure(),
                }
            }
        };
        self.dispatch_viewer(intent);
    }

    /// Hand the selector's title to the viewer and issue a lookup if the
    /// viewer started a new fetch generation.
    fn sync_viewer(&mut self) {
        let before = self.viewer.generation;
        let title = self.selector.selected_title().to_string();
        self.dispatch_viewer(ViewerIntent::TitleReceived { title });
        if self.viewer.generation != before {
            self.request_lookup();
        }
    }

    fn request_lookup(&mut self) {
        let Some(title) = self.viewer.title.clone() else {
            return;
        };
        let generation = self.viewer.generation;
        tracing::debug!(generation, title = %title, "Requesting lookup");

        let command = UiCommand::Lookup {
            generation,
            title: title.clone(),
        };
        if let Err(err) = self.lookup_sender.try_send(command) {
            let err = LookupError::WorkerUnavailable(err.to_string());
            tracing::error!(title = %title, error = %err, "Could not queue lookup");
            self.dispatch_viewer(ViewerIntent::FetchFailed {
                generation,
                failure: err.to_failure(),
            });
        }
    }

    fn dispatch_selector(&mut self, intent: SelectorIntent) {
        dispatch_mvi!(self, selector, SelectorReducer, intent);
    }

    fn dispatch_viewer(&mut self, intent: ViewerIntent) {
        dispatch_mvi!(self, viewer, ViewerReducer, intent);
    }
}
