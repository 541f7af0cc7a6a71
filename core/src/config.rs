//! Client configuration read from the environment.

use std::env;

/// Base URL used when `ADMIN_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix the routes are appended to.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `ADMIN_API_BASE_URL`; unset or blank falls back to the default.
    pub fn from_env() -> Self {
        Self::from_base_url(env::var("ADMIN_API_BASE_URL").ok().as_deref())
    }

    fn from_base_url(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self {
                base_url: url.to_string(),
            },
            _ => Self::default(),
        }
    }
}
