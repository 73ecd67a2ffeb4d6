//! Login against the configured HTTP endpoint and the resulting session.

mod client;
mod error;
mod session;
mod validation;

pub use client::{LoginClient, UserProfile};
pub use error::{AuthError, LOGIN_FAILED};
pub use session::{AuthSession, Session};
pub use validation::{validate_credentials, INVALID_EMAIL, MISSING_PASSWORD, MISSING_USERNAME};
