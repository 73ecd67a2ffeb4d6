//! One-shot lookup of the user's position.
//!
//! Permission is requested once. A refusal or a failed read leaves the
//! location unknown for the rest of the process; nothing retries.

mod source;

pub use source::{
    source_from_config, DeniedLocation, EnvLocation, FixedLocation, LocationError,
    LocationSource, Permission, LAT_ENV_VAR, LON_ENV_VAR,
};

use crate::geo::Coordinate;

/// Outcome of the lookup as seen by the rest of the app.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Pending,
    Located(Coordinate),
    Failed(String),
}

impl LocationState {
    pub fn location(&self) -> Option<Coordinate> {
        match self {
            LocationState::Located(c) => Some(*c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LocationState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }
}

/// Request permission, then read the position once.
pub fn resolve(source: &dyn LocationSource) -> LocationState {
    if source.request_permission() == Permission::Denied {
        tracing::warn!(source = source.name(), "Location permission denied");
        return LocationState::Failed(LocationError::PermissionDenied.to_string());
    }

    match source.current_position() {
        Ok(coordinate) => {
            tracing::info!(
                source = source.name(),
                lat = coordinate.lat,
                lon = coordinate.lon,
                "Location resolved"
            );
            LocationState::Located(coordinate)
        }
        Err(err) => {
            if let LocationError::Unavailable { reason } = &err {
                tracing::warn!(source = source.name(), %reason, "Location lookup failed");
            }
            LocationState::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn fixed_source_resolves() {
        let state = resolve(&FixedLocation::new(Coordinate::new(6.5, 3.4)));
        assert_eq!(state.location(), Some(Coordinate::new(6.5, 3.4)));
        assert!(state.error().is_none());
    }

    #[test]
    fn denied_source_fails_with_permission_message() {
        let state = resolve(&DeniedLocation);
        assert!(state.location().is_none());
        assert_eq!(state.error(), Some("Permission to access location was denied"));
    }

    #[test]
    fn env_source_reads_vars() {
        env::set_var("VS_TEST_LAT_OK", "6.45");
        env::set_var("VS_TEST_LON_OK", " 3.39 ");
        let state = resolve(&EnvLocation::with_vars("VS_TEST_LAT_OK", "VS_TEST_LON_OK"));
        assert_eq!(state.location(), Some(Coordinate::new(6.45, 3.39)));
        env::remove_var("VS_TEST_LAT_OK");
        env::remove_var("VS_TEST_LON_OK");
    }

    #[test]
    fn env_source_missing_var_fails() {
        let state = resolve(&EnvLocation::with_vars("VS_TEST_LAT_MISSING", "VS_TEST_LON_MISSING"));
        assert_eq!(state.error(), Some("Failed to get location"));
    }

    #[test]
    fn env_source_garbage_fails() {
        env::set_var("VS_TEST_LAT_BAD", "north");
        env::set_var("VS_TEST_LON_BAD", "3.3");
        let state = resolve(&EnvLocation::with_vars("VS_TEST_LAT_BAD", "VS_TEST_LON_BAD"));
        assert_eq!(state.error(), Some("Failed to get location"));
        env::remove_var("VS_TEST_LAT_BAD");
        env::remove_var("VS_TEST_LON_BAD");
    }

    #[test]
    fn pending_by_default() {
        assert!(LocationState::default().is_pending());
    }
}
