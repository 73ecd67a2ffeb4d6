//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every screen and dialog keeps its state in a value that only a reducer
//! may replace.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
