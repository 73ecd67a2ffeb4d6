use crate::discovery::SortKey;
use crate::ui::mvi::Reducer;
use crate::ui::sort::intent::SortIntent;
use crate::ui::sort::state::SortDialogState;

pub struct SortReducer;

impl Reducer for SortReducer {
    type State = SortDialogState;
    type Intent = SortIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SortIntent::Open { current } => SortDialogState::Visible {
                current,
                focused: current.key,
            },
            SortIntent::Close => SortDialogState::Hidden,
            SortIntent::MoveUp | SortIntent::MoveDown => match state {
                SortDialogState::Visible { current, focused } => {
                    let keys = SortKey::ALL;
                    let idx = keys.iter().position(|k| *k == focused).unwrap_or(0);
                    let next = if matches!(intent, SortIntent::MoveDown) {
                        (idx + 1) % keys.len()
                    } else {
                        (idx + keys.len() - 1) % keys.len()
                    };
                    SortDialogState::Visible {
                        current,
                        focused: keys[next],
                    }
                }
                other => other,
            },
        }
    }
}
