mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_filter_dialog;
pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterDialogState, FilterField};
