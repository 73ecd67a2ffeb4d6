use crate::auth::client::{LoginClient, UserProfile};
use crate::auth::error::AuthError;
use crate::auth::validation::validate_credentials;
use crate::config::AuthConfig;

/// Client-side authentication state. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { profile: UserProfile },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedIn { profile } => Some(profile),
            Session::LoggedOut => None,
        }
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        *self = Session::LoggedIn { profile };
    }

    pub fn sign_out(&mut self) {
        *self = Session::LoggedOut;
    }
}

/// Session plus the means to change it.
///
/// LoggedOut → (login success) → LoggedIn → (logout) → LoggedOut.
/// A failed login leaves the session as it was.
pub struct AuthSession {
    client: LoginClient,
    min_password_length: usize,
    session: Session,
}

impl AuthSession {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        Ok(Self {
            client: LoginClient::new(config)?,
            min_password_length: config.min_password_length,
            session: Session::LoggedOut,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Validate, then make one login request.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserProfile, AuthError> {
        validate_credentials(username, password, self.min_password_length)?;

        match self.client.login(username.trim(), password).await {
            Ok(profile) => {
                tracing::info!(user = profile.display_name(), "Login succeeded");
                self.session.sign_in(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "Login failed");
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        if self.session.is_logged_in() {
            tracing::info!("Logged out");
        }
        self.session.sign_out();
    }
}
