use crate::ui::mvi::Reducer;

use super::intent::ViewerIntent;
use super::state::{DetailViewerState, ViewState};

/// Reducer for the detail viewer.
///
/// Issuing the lookup is left to the caller: it compares `generation`
/// before and after dispatching `TitleReceived` and sends one request
/// when it moved.
pub struct ViewerReducer;

impl Reducer for ViewerReducer {
    type State = DetailViewerState;
    type Intent = ViewerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewerIntent::TitleReceived { title } => {
                if state.title.as_deref() == Some(title.as_str()) {
                    return state;
                }
                DetailViewerState {
                    title: Some(title),
                    generation: state.generation.wrapping_add(1),
                    view: ViewState::Loading,
                    animation_tick: 0,
                }
            }

            ViewerIntent::FetchSucceeded {
                generation,
                summary,
            } if state.accepts(generation) => DetailViewerState {
                view: ViewState::Loaded(summary),
                ..state
            },

            ViewerIntent::FetchFailed {
                generation,
                failure,
            } if state.accepts(generation) => DetailViewerState {
                view: ViewState::Failed(failure),
                ..state
            },

            // Stale result: superseded by a newer fetch.
            ViewerIntent::FetchSucceeded { .. } | ViewerIntent::FetchFailed { .. } => state,

            ViewerIntent::AnimationTick if state.is_loading() => DetailViewerState {
                animation_tick: state.animation_tick.wrapping_add(1),
                ..state
            },

            ViewerIntent::AnimationTick => state,
        }
    }
}
