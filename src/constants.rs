//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default scoring service URL (local development endpoint)
pub const DEFAULT_SERVER_URL: &str = "http://localhost:30002";

/// Environment variable that overrides the scoring service URL
pub const SERVER_URL_ENV: &str = "BANDCHECK_SERVER_URL";

/// Scoring endpoint path on the service
pub const SCORE_ESSAY_PATH: &str = "/ai/scoreEssay";

/// Application name
pub const APP_NAME: &str = "Bandcheck";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
