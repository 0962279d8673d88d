//! State for the movie detail viewer.

use crate::omdb::{LookupFailure, MovieSummary};
use crate::ui::mvi::UiState;

/// What the detail card shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// A lookup is in flight (or none has been started yet).
    #[default]
    Loading,
    /// The most recent lookup found a movie.
    Loaded(MovieSummary),
    /// The most recent lookup failed. The failure is kept for diagnostics.
    Failed(LookupFailure),
}

/// Detail viewer state machine.
///
/// `generation` counts initiated fetches. A lookup result is applied only
/// when it carries the current generation, so a slow response for an old
/// title can never overwrite the view for a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailViewerState {
    /// Title of the most recently initiated fetch. `None` until first activation.
    pub title: Option<String>,
    pub generation: u64,
    pub view: ViewState,
    /// Spinner frame while loading.
    pub animation_tick: u8,
}

impl UiState for DetailViewerState {}

impl DetailViewerState {
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.view, ViewState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.view, ViewState::Failed(_))
    }

    pub fn summary(&self) -> Option<&MovieSummary> {
        match &self.view {
            ViewState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LookupFailure> {
        match &self.view {
            ViewState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// True when a result tagged with `generation` may still be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        self.title.is_some() && generation == self.generation
    }
}
