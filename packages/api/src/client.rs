//! The shared HTTP client.
//!
//! One [`ApiClient`] is built at startup with the backend base address and a
//! JSON content type. Every resource access function issues its request
//! through it. No interceptors, auth headers, retries or timeouts.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};

use crate::ApiError;

/// Environment variable holding the backend base address.
pub const API_URL_VAR: &str = "API_URL";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` must start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }
}

/// The `API_URL` value visible to this build, if any.
///
/// Browsers have no process environment, so wasm builds read the value the
/// binary was compiled with. Native builds read the process environment,
/// loading `.env` first.
pub fn api_url_from_env() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        option_env!("API_URL").map(str::to_string)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        std::env::var(API_URL_VAR).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_base_url() {
        assert!(matches!(ApiClient::new("/api"), Err(ApiError::BaseUrl(_))));
        assert!(matches!(ApiClient::new(""), Err(ApiError::BaseUrl(_))));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/users"), "http://localhost:3000/api/users");
    }
}
