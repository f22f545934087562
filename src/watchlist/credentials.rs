//! API credentials.

use std::fmt;

use thiserror::Error;

/// Credentials are checked before any request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Missing username and password")]
    MissingBoth,

    #[error("Missing username")]
    MissingUsername,

    #[error("Missing password")]
    MissingPassword,
}

/// Username/password pair for HTTP Basic authentication.
///
/// Either half may be absent when collected from flags or the environment;
/// [`Credentials::validate`] enforces that both are present and non-empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> Option<&str> {
        present(&self.username)
    }

    pub fn password(&self) -> Option<&str> {
        present(&self.password)
    }

    /// Both halves, or the reason they cannot be used.
    pub fn validate(&self) -> Result<(&str, &str), CredentialError> {
        match (self.username(), self.password()) {
            (Some(user), Some(pass)) => Ok((user, pass)),
            (None, None) => Err(CredentialError::MissingBoth),
            (None, Some(_)) => Err(CredentialError::MissingUsername),
            (Some(_), None) => Err(CredentialError::MissingPassword),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl From<(&str, &str)> for Credentials {
    fn from((username, password): (&str, &str)) -> Self {
        Self::new(Some(username.to_string()), Some(password.to_string()))
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
