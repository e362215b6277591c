//! Transport layer
//!
//! A transport sends one request to the Travis API and hands back the raw
//! status and body. It performs no retries and does not interpret status
//! codes; that is left to the endpoint wrappers.
//!
//! The layer is trait-based so the endpoint logic can be exercised against
//! scripted responses.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Selects the v3 API; without it Travis answers with the legacy v2 format
pub const TRAVIS_API_VERSION: &str = "travis-api-version";

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, e.g. `repo/cs50%2Fhello`
    pub path: String,
    /// JSON body, already serialized
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: None,
        }
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self {
            method: Method::PATCH,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        let body = serde_json::to_string(body)
            .map_err(|e| ClientError::InternalError(format!("Failed to encode body: {}", e)))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Deserialize the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Sends requests to the Travis API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a single request
    ///
    /// Transport-level faults are errors; any HTTP status, including 4xx and
    /// 5xx, is a successful [`ApiResponse`].
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport with the Travis headers preinstalled
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client for `config`
    ///
    /// Every request carries `Content-Type` and `Accept` set to
    /// `application/json`, `Travis-API-Version: 3` and the token.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(&config.token)?)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Uses a preconfigured reqwest client; headers are the caller's business
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);
        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("{} {} -> {}", request.method, request.path, status);

        Ok(ApiResponse { status, body })
    }
}

fn default_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(TRAVIS_API_VERSION),
        HeaderValue::from_static("3"),
    );

    let mut auth = HeaderValue::from_str(&format!("token {}", token))
        .map_err(|_| ClientError::Config("token contains invalid header characters".into()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}
