//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are baked in with
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// Storage key for the session token.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `NOTES_API_BASE`: API prefix, default empty (same origin)
    /// - `NOTES_TOKEN_KEY`: storage key, default `token`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("NOTES_API_BASE"), option_env!("NOTES_TOKEN_KEY"))
    }

    fn from_values(api_base: Option<&str>, token_key: Option<&str>) -> Self {
        let api_base = api_base.map(normalize_base).unwrap_or_default();
        let token_key = token_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_TOKEN_KEY)
            .to_owned();
        Self { api_base, token_key }
    }

    /// Replace the API prefix.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = normalize_base(api_base);
        self
    }

    /// Join the API prefix with an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
