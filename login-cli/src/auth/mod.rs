//! Authentication collaborator.
//!
//! The form hands validated credentials to an [`Authenticator`]. The
//! implementation is opaque to the form; all it sees is the resulting
//! [`AuthStatus`].

mod http;

pub use http::{AuthResponse, HttpAuthenticator};

use async_trait::async_trait;
use formstate::FormValues;

use crate::error::AuthError;

/// Field holding the email in submitted credentials.
pub const EMAIL_FIELD: &str = "email";

/// Field holding the password in submitted credentials.
pub const PASSWORD_FIELD: &str = "password";

/// Checks submitted credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `Ok(true)` when the credentials were accepted and `Ok(false)`
    /// when they were refused.
    async fn authenticate(&self, credentials: &FormValues) -> Result<bool, AuthError>;
}

/// Where the login attempt stands, as shown by the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; inputs are disabled.
    Loading,
    /// Credentials were accepted.
    Success,
    /// Credentials were refused or the request failed.
    Failure,
}

impl AuthStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Label for the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Success => "Login again",
            _ => "Login",
        }
    }
}

/// Extract `(email, password)` from submitted values, if both are present
/// and non-empty.
pub fn credentials(values: &FormValues) -> Option<(&str, &str)> {
    let email = values.get(EMAIL_FIELD).filter(|v| !v.is_empty())?;
    let password = values.get(PASSWORD_FIELD).filter(|v| !v.is_empty())?;
    Some((email.as_str(), password.as_str()))
}
