//! HTTP authenticator.

use async_trait::async_trait;
use formstate::FormValues;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::{Authenticator, credentials};
use crate::error::AuthError;

/// Body returned by the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// `"success"` when the credentials were accepted.
    pub result: String,
}

impl AuthResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

/// Authenticates with a `GET` against a fixed endpoint, sending the
/// credentials as HTTP basic auth.
///
/// # Example
///
/// ```ignore
/// use login_cli::auth::{Authenticator, HttpAuthenticator};
///
/// let auth = HttpAuthenticator::new("https://auth.example.com/check".parse()?);
/// let accepted = auth.authenticate(&form_values).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    url: Url,
    http_client: reqwest::Client,
}

impl HttpAuthenticator {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<bool, AuthError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: AuthResponse = serde_json::from_str(&body)?;
        Ok(parsed.is_success())
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, values: &FormValues) -> Result<bool, AuthError> {
        let Some((email, password)) = credentials(values) else {
            return Err(AuthError::MissingCredentials);
        };

        log::debug!("authenticating '{}' against {}", email, self.url);
        let response = self
            .http_client
            .get(self.url.clone())
            .basic_auth(email, Some(password))
            .send()
            .await?;

        let accepted = self.handle_response(response).await?;
        log::info!("authentication for '{}': accepted={}", email, accepted);
        Ok(accepted)
    }
}
