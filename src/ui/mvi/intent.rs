//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Key presses on a screen or dialog
/// - Results arriving from background work (login, location)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
