use crate::discovery::FilterState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Rating,
    Distance,
    OpenNow,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Rating, FilterField::Distance, FilterField::OpenNow];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Rating => "Minimum rating",
            FilterField::Distance => "Maximum distance",
            FilterField::OpenNow => "Open now",
        }
    }
}

/// The filter dialog edits a draft; nothing reaches the vendor list until
/// the draft is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterDialogState {
    #[default]
    Hidden,
    Visible {
        draft: FilterState,
        focused: FilterField,
    },
}

impl UiState for FilterDialogState {}

impl FilterDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<FilterState> {
        match self {
            Self::Visible { draft, .. } => Some(*draft),
            Self::Hidden => None,
        }
    }
}
