//! Base trait for UI state in MVI architecture.

/// Marker trait for screen and dialog state.
///
/// `Default` is the state before anything happened; `App` relies on it to
/// move the old state out with `std::mem::take` during dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
