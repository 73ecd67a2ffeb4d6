//! Credential checks run before the login request is sent.

use crate::auth::error::AuthError;

pub const MISSING_USERNAME: &str = "Please enter your username or email";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MISSING_PASSWORD: &str = "Please enter your password";

/// Check credentials in form order; the first problem wins.
///
/// `min_password_length` of 0 disables the length check.
pub fn validate_credentials(
    username: &str,
    password: &str,
    min_password_length: usize,
) -> Result<(), AuthError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::validation(MISSING_USERNAME));
    }
    if username.contains('@') && !looks_like_email(username) {
        return Err(AuthError::validation(INVALID_EMAIL));
    }
    if password.trim().is_empty() {
        return Err(AuthError::validation(MISSING_PASSWORD));
    }
    if password.chars().count() < min_password_length {
        return Err(AuthError::validation(format!(
            "Password must be at least {} characters",
            min_password_length
        )));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and no empty labels.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
