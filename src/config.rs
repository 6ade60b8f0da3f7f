//! Scoring service configuration
//!
//! The base URL is resolved once at startup and validated before the
//! terminal UI takes over, so a bad value fails loudly instead of
//! producing a broken request target later.

use anyhow::{bail, Result};

use crate::constants::{DEFAULT_SERVER_URL, SERVER_URL_ENV};

/// Resolved application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from the environment, falling back to the
    /// default development server.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let base_url = validate_base_url(&raw)?;
        Ok(Config { base_url })
    }
}

/// Validate and normalize a base URL.
///
/// Requires an http/https scheme and a non-empty host; strips any
/// trailing slash so paths can be appended directly.
pub fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_string()),
        Some(_) => bail!("server URL has no host: '{}'", raw),
        None => bail!(
            "server URL must start with http:// or https:// (got '{}'); set {} to override",
            raw,
            SERVER_URL_ENV
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_url() {
        let url = validate_base_url("http://localhost:30002").unwrap();
        assert_eq!(url, "http://localhost:30002");
    }

    #[test]
    fn test_strips_trailing_slash() {
        let url = validate_base_url("https://scoring.example.com/").unwrap();
        assert_eq!(url, "https://scoring.example.com");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(validate_base_url("localhost:30002").is_err());
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(validate_base_url("http://").is_err());
    }
}
