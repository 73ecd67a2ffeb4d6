use std::env;

use thiserror::Error;

use crate::config::{LocationConfig, LocationSourceKind};
use crate::geo::Coordinate;

pub const LAT_ENV_VAR: &str = "VENDORSCOPE_LAT";
pub const LON_ENV_VAR: &str = "VENDORSCOPE_LON";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Permission to access location was denied")]
    PermissionDenied,

    /// `reason` is logged, not shown.
    #[error("Failed to get location")]
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Device position API: ask for permission, then read the position once.
pub trait LocationSource: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    fn request_permission(&self) -> Permission;

    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Always reports the configured coordinate.
pub struct FixedLocation {
    coordinate: Coordinate,
}

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationSource for FixedLocation {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

/// Reads latitude and longitude from environment variables.
pub struct EnvLocation {
    lat_var: String,
    lon_var: String,
}

impl Default for EnvLocation {
    fn default() -> Self {
        Self::with_vars(LAT_ENV_VAR, LON_ENV_VAR)
    }
}

impl EnvLocation {
    pub fn with_vars(lat_var: impl Into<String>, lon_var: impl Into<String>) -> Self {
        Self {
            lat_var: lat_var.into(),
            lon_var: lon_var.into(),
        }
    }

    fn read(&self, var: &str) -> Result<f64, LocationError> {
        let raw = env::var(var).map_err(|e| LocationError::Unavailable {
            reason: format!("{}: {}", var, e),
        })?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LocationError::Unavailable {
                reason: format!("{} is not a number: '{}'", var, raw),
            })
    }
}

impl LocationSource for EnvLocation {
    fn name(&self) -> &'static str {
        "env"
    }

    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coordinate, LocationError> {
        let lat = self.read(&self.lat_var)?;
        let lon = self.read(&self.lon_var)?;
        Ok(Coordinate::new(lat, lon))
    }
}

/// Refuses permission every time.
pub struct DeniedLocation;

impl LocationSource for DeniedLocation {
    fn name(&self) -> &'static str {
        "denied"
    }

    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

pub fn source_from_config(config: &LocationConfig) -> Box<dyn LocationSource> {
    match config.source {
        LocationSourceKind::Fixed => Box::new(FixedLocation::new(Coordinate::new(
            config.latitude,
            config.longitude,
        ))),
        LocationSourceKind::Env => Box::new(EnvLocation::default()),
        LocationSourceKind::Denied => Box::new(DeniedLocation),
    }
}
