use crate::discovery::SortConfig;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SortIntent {
    Open { current: SortConfig },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for SortIntent {}
