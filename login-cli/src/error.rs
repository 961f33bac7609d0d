//! Error types

/// Errors that can occur while talking to the authentication endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Email or password was empty, so no request was made.
    #[error("Missing credentials")]
    MissingCredentials,

    /// The endpoint answered with a non-success status.
    #[error("Unexpected auth response status: {0}")]
    UnexpectedStatus(u16),

    /// Network error during authentication.
    #[error("Network error during auth: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse authentication response.
    #[error("Auth response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The auth endpoint is not a valid absolute URL.
    #[error("Invalid auth URL '{url}': {source}")]
    InvalidAuthUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No log file location was configured and no cache directory exists.
    #[error("No log file location available; set LOGIN_LOG_FILE")]
    NoLogLocation,
}
