use crate::discovery::{DiscoveryQuery, FilterState};
use crate::ui::discovery::intent::DiscoveryIntent;
use crate::ui::discovery::state::DiscoveryState;
use crate::ui::mvi::Reducer;

pub struct DiscoveryReducer;

impl Reducer for DiscoveryReducer {
    type State = DiscoveryState;
    type Intent = DiscoveryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let DiscoveryState { mut query, selected } = state;

        match intent {
            DiscoveryIntent::LoadMore { total_matches } => {
                if query.shown_limit() < total_matches {
                    query.page += 1;
                }
                return DiscoveryState { query, selected };
            }
            DiscoveryIntent::MoveUp => {
                return DiscoveryState {
                    query,
                    selected: selected.saturating_sub(1),
                };
            }
            DiscoveryIntent::MoveDown { shown } => {
                let selected = if selected + 1 < shown {
                    selected + 1
                } else {
                    selected
                };
                return DiscoveryState { query, selected };
            }
            DiscoveryIntent::SetSearch(text) => query.search = text,
            DiscoveryIntent::PushSearchChar(ch) => query.search.push(ch),
            DiscoveryIntent::PopSearchChar => {
                query.search.pop();
            }
            DiscoveryIntent::ClearSearch => query.search.clear(),
            DiscoveryIntent::SelectCategory(category) => query.category = category,
            DiscoveryIntent::NextCategory => query.category = query.category.next(),
            DiscoveryIntent::PrevCategory => query.category = query.category.prev(),
            DiscoveryIntent::ApplyFilter(filter) => query.filter = filter,
            DiscoveryIntent::ResetFilter => query.filter = FilterState::default(),
            DiscoveryIntent::SelectSort(key) => query.sort = query.sort.select(key),
        }

        // Any change to what is matched or how it is ordered starts over.
        restart(query)
    }
}

fn restart(mut query: DiscoveryQuery) -> DiscoveryState {
    query.page = 1;
    DiscoveryState { query, selected: 0 }
}
