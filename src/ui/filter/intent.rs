use crate::discovery::FilterState;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FilterIntent {
    /// Show the dialog with the filter currently in effect as the draft.
    Open { current: FilterState },
    Close,
    MoveUp,
    MoveDown,
    /// Next value of the focused field (Right / Space).
    Increase,
    /// Previous value of the focused field (Left).
    Decrease,
    /// Every field back to "any".
    Reset,
}

impl Intent for FilterIntent {}
