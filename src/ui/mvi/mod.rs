//! Model-View-Intent (MVI) primitives shared by the UI components.
//!
//! ```text
//! key press / lookup result ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                      │
//!        └──────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Whatever a transition implies for the outside world
//! (sending a lookup) is done by the caller after dispatching.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
