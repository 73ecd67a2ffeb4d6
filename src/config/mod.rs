//! TOML configuration: types with defaults, loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AuthConfig, Config, DiscoveryConfig, LocationConfig, LocationSourceKind, LoggingConfig,
};
