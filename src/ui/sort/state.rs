use crate::discovery::{SortConfig, SortKey};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SortDialogState {
    #[default]
    Hidden,
    Visible {
        /// Sort in effect when the dialog opened, shown for reference.
        current: SortConfig,
        focused: SortKey,
    },
}

impl UiState for SortDialogState {}

impl SortDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused(&self) -> Option<SortKey> {
        match self {
            Self::Visible { focused, .. } => Some(*focused),
            Self::Hidden => None,
        }
    }
}
