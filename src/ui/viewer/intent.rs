use crate::omdb::{LookupFailure, MovieSummary};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// The parent delivered a title (on mount or after any selector change).
    /// Starts a new fetch generation only if the title differs from the one
    /// of the last initiated fetch.
    TitleReceived { title: String },

    /// Lookup for `generation` found a movie.
    FetchSucceeded {
        generation: u64,
        summary: MovieSummary,
    },

    /// Lookup for `generation` failed.
    FetchFailed {
        generation: u64,
        failure: LookupFailure,
    },

    /// Spinner animation tick.
    AnimationTick,
}

impl Intent for ViewerIntent {}
