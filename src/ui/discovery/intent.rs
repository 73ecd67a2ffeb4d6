use crate::discovery::{Category, FilterState, SortKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DiscoveryIntent {
    SetSearch(String),
    PushSearchChar(char),
    PopSearchChar,
    ClearSearch,
    SelectCategory(Category),
    NextCategory,
    PrevCategory,
    ApplyFilter(FilterState),
    ResetFilter,
    /// Same key flips direction, a new key starts descending.
    SelectSort(SortKey),
    /// Show one more page if `total_matches` exceeds what is shown.
    LoadMore { total_matches: usize },
    MoveUp,
    /// `shown` is the length of the rendered slice.
    MoveDown { shown: usize },
}

impl Intent for DiscoveryIntent {}
