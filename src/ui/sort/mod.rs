mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_sort_dialog;
pub use intent::SortIntent;
pub use reducer::SortReducer;
pub use state::SortDialogState;
