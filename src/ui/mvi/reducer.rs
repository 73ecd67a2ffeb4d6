//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
///
/// Reducers never touch the network, the terminal or the clock; anything
/// of that kind happens in `App` before or after dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
