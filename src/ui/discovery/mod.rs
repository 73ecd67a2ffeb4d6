mod intent;
mod reducer;
mod state;

pub use intent::DiscoveryIntent;
pub use reducer::DiscoveryReducer;
pub use state::DiscoveryState;
