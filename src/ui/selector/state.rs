//! State for the title dropdown.

use crate::ui::mvi::UiState;

/// Titles offered by the dropdown, in display order.
pub const MOVIE_TITLES: &[&str] = &[
    "Doctor Strange",
    "Ironman",
    "Black Widow",
    "The Avengers",
    "The Hulk",
];

/// Whether the option list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Collapsed,
    Expanded {
        /// Option under the cursor, committed on Enter.
        highlighted: usize,
    },
}

/// Dropdown state: the committed selection plus the open/closed menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub(crate) selected: usize,
    pub(crate) menu: Menu,
}

impl UiState for SelectorState {}

impl SelectorState {
    pub fn options(&self) -> &'static [&'static str] {
        MOVIE_TITLES
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The committed title, handed down to the detail viewer.
    pub fn selected_title(&self) -> &'static str {
        MOVIE_TITLES[self.selected.min(MOVIE_TITLES.len() - 1)]
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.menu, Menu::Expanded { .. })
    }

    /// Highlighted option while expanded.
    pub fn highlighted(&self) -> Option<usize> {
        match self.menu {
            Menu::Expanded { highlighted } => Some(highlighted),
            Menu::Collapsed => None,
        }
    }
}
