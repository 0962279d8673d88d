//! Movie detail viewer component.
//!
//! Receives the selected title from the parent, tracks the lookup for it
//! through Loading / Loaded / Failed, and drops results that belong to a
//! superseded fetch.
//!
//! - `state.rs` - view model and fetch generation
//! - `intent.rs` - title delivery, lookup results, ticks
//! - `reducer.rs` - transitions with the staleness guard
//! - `card.rs` - rendering

mod card;
mod intent;
mod reducer;
mod state;

pub use card::{card_lines, render_card, FAILED_LABEL, NO_POSTER_LABEL};
pub use intent::ViewerIntent;
pub use reducer::ViewerReducer;
pub use state::{DetailViewerState, ViewState};
