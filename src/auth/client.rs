use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::error::{AuthError, LOGIN_FAILED};
use crate::config::AuthConfig;

/// Profile returned by a successful login. Unknown fields are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Signed in")
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the login endpoint.
///
/// Each call makes exactly one attempt; there is no retry.
#[derive(Clone)]
pub struct LoginClient {
    client: Client,
    login_url: String,
}

impl LoginClient {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| AuthError::ClientBuild { source })?;

        Ok(Self {
            client,
            login_url: config.login_url.clone(),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// POST `{username, password}` as JSON and parse the profile on 2xx.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, AuthError> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|source| AuthError::Network { source })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Login response received");

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|source| AuthError::Network { source })?;
            return serde_json::from_slice::<UserProfile>(&body)
                .map_err(|source| AuthError::InvalidProfile { source });
        }

        // A rejection stays a rejection even if its body cannot be read.
        let body = response.bytes().await.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Failed to read login rejection body");
            Default::default()
        });
        let message = rejection_message(&body);

        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Server-provided `message`, or the generic text when there is none.
fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| LOGIN_FAILED.to_string())
}
