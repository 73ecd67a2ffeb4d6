use crate::discovery::FilterState;
use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::state::{FilterDialogState, FilterField};
use crate::ui::mvi::Reducer;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterDialogState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Open { current } => FilterDialogState::Visible {
                draft: current,
                focused: FilterField::Rating,
            },
            FilterIntent::Close => FilterDialogState::Hidden,
            FilterIntent::MoveUp => match state {
                FilterDialogState::Visible { draft, focused } => FilterDialogState::Visible {
                    draft,
                    focused: step_field(focused, false),
                },
                other => other,
            },
            FilterIntent::MoveDown => match state {
                FilterDialogState::Visible { draft, focused } => FilterDialogState::Visible {
                    draft,
                    focused: step_field(focused, true),
                },
                other => other,
            },
            FilterIntent::Increase | FilterIntent::Decrease => match state {
                FilterDialogState::Visible { mut draft, focused } => {
                    let forward = matches!(intent, FilterIntent::Increase);
                    match focused {
                        FilterField::Rating => draft.cycle_rating(forward),
                        FilterField::Distance => draft.cycle_distance(forward),
                        FilterField::OpenNow => draft.open_now = !draft.open_now,
                    }
                    FilterDialogState::Visible { draft, focused }
                }
                other => other,
            },
            FilterIntent::Reset => match state {
                FilterDialogState::Visible { focused, .. } => FilterDialogState::Visible {
                    draft: FilterState::default(),
                    focused,
                },
                other => other,
            },
        }
    }
}

fn step_field(focused: FilterField, forward: bool) -> FilterField {
    let all = FilterField::ALL;
    let idx = all.iter().position(|f| *f == focused).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next]
}
