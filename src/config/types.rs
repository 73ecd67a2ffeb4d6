use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::discovery::DEFAULT_PAGE_SIZE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Login endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// URL receiving the login POST.
    #[serde(default = "default_login_url")]
    pub login_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Minimum password length checked before any request. 0 disables the check.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

/// Vendor list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Vendors added per "load more" (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Vendor fixture to use instead of the bundled one.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

/// Where the user's position comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSourceKind {
    /// Configured `latitude`/`longitude`.
    #[default]
    Fixed,
    /// `VENDORSCOPE_LAT` / `VENDORSCOPE_LON` environment variables.
    Env,
    /// Permission is always refused.
    Denied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSourceKind,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_login_url() -> String {
    "http://127.0.0.1:3000/api/auth/login".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_min_password_length() -> usize {
    6
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_latitude() -> f64 {
    6.5244
}

fn default_longitude() -> f64 {
    3.3792
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fixture_path: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSourceKind::default(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
