use thiserror::Error;

/// Generic text when the server gives no reason for a rejected login.
pub const LOGIN_FAILED: &str = "Login failed";

/// Errors surfaced by credential validation and the login call.
///
/// `Display` yields the text shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Local credential check failed; no request was sent.
    #[error("{message}")]
    Validation { message: String },

    /// Endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request never completed.
    #[error("Unable to reach the login service: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Success status, but the body is not a user profile.
    #[error("Login response was not a valid user profile: {source}")]
    InvalidProfile {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation {
            message: message.into(),
        }
    }

    /// True for errors raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation { .. })
    }

    /// HTTP status for rejected logins.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
