use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorIntent {
    /// Open the option list with the current selection highlighted.
    Open,
    /// Close the option list without changing the selection.
    Close,
    /// Expanded: move the highlight up. Collapsed: select the previous title.
    MoveUp,
    /// Expanded: move the highlight down. Collapsed: select the next title.
    MoveDown,
    /// Commit the highlighted title and close. No-op while collapsed.
    Confirm,
    /// Commit the title at `index` directly and close.
    Choose { index: usize },
}

impl Intent for SelectorIntent {}
