use crate::ui::mvi::Reducer;

use super::intent::SelectorIntent;
use super::state::{Menu, SelectorState, MOVIE_TITLES};

pub struct SelectorReducer;

impl Reducer for SelectorReducer {
    type State = SelectorState;
    type Intent = SelectorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = MOVIE_TITLES.len();
        match intent {
            SelectorIntent::Open => SelectorState {
                menu: Menu::Expanded {
                    highlighted: state.selected,
                },
                ..state
            },
            SelectorIntent::Close => SelectorState {
                menu: Menu::Collapsed,
                ..state
            },
            SelectorIntent::MoveUp => match state.menu {
                Menu::Expanded { highlighted } => SelectorState {
                    menu: Menu::Expanded {
                        highlighted: previous(highlighted, len),
                    },
                    ..state
                },
                Menu::Collapsed => SelectorState {
                    selected: previous(state.selected, len),
                    ..state
                },
            },
            SelectorIntent::MoveDown => match state.menu {
                Menu::Expanded { highlighted } => SelectorState {
                    menu: Menu::Expanded {
                        highlighted: next(highlighted, len),
                    },
                    ..state
                },
                Menu::Collapsed => SelectorState {
                    selected: next(state.selected, len),
                    ..state
                },
            },
            SelectorIntent::Confirm => match state.menu {
                Menu::Expanded { highlighted } => SelectorState {
                    selected: highlighted,
                    menu: Menu::Collapsed,
                },
                Menu::Collapsed => state,
            },
            SelectorIntent::Choose { index } if index < len => SelectorState {
                selected: index,
                menu: Menu::Collapsed,
            },
            SelectorIntent::Choose { .. } => state,
        }
    }
}

fn previous(index: usize, len: usize) -> usize {
    if index == 0 {
        len.saturating_sub(1)
    } else {
        index - 1
    }
}

fn next(index: usize, len: usize) -> usize {
    if index + 1 >= len {
        0
    } else {
        index + 1
    }
}
