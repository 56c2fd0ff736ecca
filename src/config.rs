//! Session configuration: backend location and navigation targets.
//!
//! Templates may embed a JSON object in
//! `<script id="auth-config" type="application/json">` to override any field;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_PROTECTED_ROUTE: &str = "/ui/products";
pub const DEFAULT_ROOT_ROUTE: &str = "/";

const TOKEN_PATH: &str = "/auth/token";
const USERS_PATH: &str = "/auth/users/";
const PROFILE_PATH: &str = "/auth/users/me/";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config was not a valid JSON object of known fields.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Prefix for every backend call. Empty means same origin.
    pub api_base: String,
    /// Where a successful login lands.
    pub protected_route: String,
    /// Site root; logout navigates here unless already on it.
    pub root_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            protected_route: DEFAULT_PROTECTED_ROUTE.to_owned(),
            root_route: DEFAULT_ROOT_ROUTE.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Parse config from a JSON object, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let api_base = config.api_base.clone();
        Ok(config.with_api_base(&api_base))
    }

    /// Replace the API base, dropping any trailing `/`.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        api_base.trim_end_matches('/').clone_into(&mut self.api_base);
        self
    }

    pub fn token_url(&self) -> String {
        format!("{}{TOKEN_PATH}", self.api_base)
    }

    pub fn users_url(&self) -> String {
        format!("{}{USERS_PATH}", self.api_base)
    }

    pub fn profile_url(&self) -> String {
        format!("{}{PROFILE_PATH}", self.api_base)
    }
}
