//! Title dropdown component.
//!
//! Owns the fixed list of titles and the committed selection. The parent
//! reads `selected_title()` after every dispatch and hands it to the
//! detail viewer.

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::SelectorIntent;
pub use reducer::SelectorReducer;
pub use state::{Menu, SelectorState, MOVIE_TITLES};
pub use widget::{render_menu, render_selector, SELECTOR_HEIGHT};
