use super::intent::Intent;
use super::state::UiState;

/// The only place where component state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
