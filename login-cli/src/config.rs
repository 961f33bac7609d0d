//! Runtime configuration.

use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;
use crate::paths;

/// Auth endpoint used when `LOGIN_AUTH_URL` is not set.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:3000/auth";

/// Environment variable overriding the auth endpoint.
pub const AUTH_URL_VAR: &str = "LOGIN_AUTH_URL";

/// Environment variable overriding the log file path.
pub const LOG_FILE_VAR: &str = "LOGIN_LOG_FILE";

/// Settings for the login binary.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// Endpoint queried to authenticate credentials.
    pub auth_url: Url,
    /// File the logger writes to.
    pub log_file: PathBuf,
}

impl LoginConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(AUTH_URL_VAR).unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
        let auth_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidAuthUrl {
            url: raw_url.clone(),
            source,
        })?;

        let log_file = match lookup(LOG_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => paths::log_file().ok_or(ConfigError::NoLogLocation)?,
        };

        Ok(Self { auth_url, log_file })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_overrides() {
        let config = LoginConfig::from_lookup(lookup(&[
            (AUTH_URL_VAR, "https://auth.example.com/check"),
            (LOG_FILE_VAR, "/tmp/login.log"),
        ]))
        .unwrap();

        assert_eq!(config.auth_url.as_str(), "https://auth.example.com/check");
        assert_eq!(config.log_file, PathBuf::from("/tmp/login.log"));
    }

    #[test]
    fn test_default_auth_url() {
        let config = LoginConfig::from_lookup(lookup(&[(LOG_FILE_VAR, "login.log")])).unwrap();
        assert_eq!(config.auth_url.as_str(), DEFAULT_AUTH_URL);
    }

    #[test]
    fn test_invalid_auth_url() {
        let err = LoginConfig::from_lookup(lookup(&[
            (AUTH_URL_VAR, "not a url"),
            (LOG_FILE_VAR, "login.log"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidAuthUrl { ref url, .. } if url == "not a url"));
    }
}
