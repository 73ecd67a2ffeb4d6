use crate::discovery::DiscoveryQuery;
use crate::ui::mvi::UiState;

/// Home screen selection: the pipeline query plus the highlighted row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoveryState {
    pub query: DiscoveryQuery,
    /// Index into the currently shown slice.
    pub selected: usize,
}

impl UiState for DiscoveryState {}

impl DiscoveryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: DiscoveryQuery::with_page_size(page_size),
            selected: 0,
        }
    }
}
