//! # Console configuration: `admin.toml`
//!
//! Defines the TOML configuration the web binary embeds at build time.
//! Every section has production defaults, so a missing or empty file is
//! equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"
//!
//! [users]
//! page = 1         # page requested on load
//! limit = 50       # records requested on load
//! page_size = 10   # rows per table page
//!
//! [search]
//! debounce_ms = 400
//!
//! [session]
//! role = 1         # role id the navigation is filtered for
//! ```
//!
//! The `API_URL` environment variable overrides `api.base_url`; see
//! [`AdminConfig::with_base_url`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debounce::SEARCH_DEBOUNCE;
use crate::table::DEFAULT_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid admin.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    BaseUrl(String),
}

/// Top-level configuration stored in `admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Serve users from memory instead of the backend.
    #[serde(default)]
    pub offline: bool,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            offline: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsersConfig {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE.as_millis() as u64
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Role id used to filter navigation. There is no login, so this is fixed.
    #[serde(default = "default_role")]
    pub role: u8,
}

fn default_role() -> u8 {
    1
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Parse and check a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Override the API base URL. Blank values are ignored; the result is
    /// checked the same way a parsed file is.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::BaseUrl(url.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = AdminConfig::from_toml("").unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.users.page, 1);
        assert_eq!(config.users.limit, 50);
        assert_eq!(config.users.page_size, 10);
        assert_eq!(config.search.debounce(), Duration::from_millis(400));
        assert_eq!(config.session.role, 1);
    }

    #[test]
    fn test_partial_sections() {
        let config = AdminConfig::from_toml(
            r#"
            [api]
            base_url = "https://admin.example.com/api"

            [users]
            limit = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://admin.example.com/api");
        assert_eq!(config.users.limit, 100);
        assert_eq!(config.users.page, 1);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = AdminConfig::from_toml("[api]\nbase_url = \"ftp://x\"").unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = AdminConfig::from_toml("[users\npage = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_base_url_override() {
        let config = AdminConfig::default()
            .with_base_url(Some("http://10.0.0.5:8080/"))
            .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8080");

        let config = AdminConfig::default().with_base_url(Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn test_base_url_override_is_checked() {
        let err = AdminConfig::default()
            .with_base_url(Some("localhost:3000/api"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl(ref url) if url == "localhost:3000/api"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AdminConfig::default()
            .with_base_url(Some("https://api.example.com"))
            .unwrap();
        let parsed = AdminConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
