//! # plx-client
//!
//! HTTP client, action layer, and status poller for the Parallax backend.
//!
//! - [`ApiClient`] wraps `reqwest` with the backend's conventions: every
//!   request is JSON, GET bodies travel as query parameters, and any
//!   non-success status becomes [`ApiError::Status`].
//! - [`actions`] converts form input into typed requests and transport
//!   errors into user-facing [`actions::ActionError`]s.
//! - [`poller`] watches a freshly created project until it is ready.

pub mod actions;
pub mod poller;

mod error;
mod history;
mod http;
mod models;
mod projects;
mod query;
mod scraped;

pub use error::ApiError;
pub use reqwest::Method;

use std::time::Duration;

use plx_config::ApiConfig;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};

use crate::http::{append_query, check_response, decode};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.trimmed_base_url().to_string(),
        })
    }

    /// Client with default settings pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the JSON response.
    ///
    /// For GET, `body` is flattened into query parameters and no request body
    /// is sent. For every other method it is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-success responses,
    /// [`ApiError::Http`] for transport failures, and [`ApiError::Decode`]
    /// when the response is not the expected JSON.
    pub async fn call<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, endpoint, body)?;
        tracing::info!(method = %request.method(), url = %request.url(), "API request");
        let resp = check_response(self.http.execute(request).await?).await?;
        decode(resp).await
    }

    /// Build the request [`Self::call`] would send, without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the endpoint does not form a URL,
    /// [`ApiError::Decode`] if the body cannot be serialized.
    pub fn build_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let raw = format!("{}{endpoint}", self.base_url);
        let mut url = reqwest::Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if method == Method::GET {
            if let Some(body) = body {
                append_query(&mut url, &serde_json::to_value(body)?);
            }
        }

        let builder = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        let builder = match body {
            Some(body) if method != Method::GET => builder.json(body),
            _ => builder,
        };
        Ok(builder.build()?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.call::<(), T>(Method::GET, endpoint, None).await
    }

    async fn get_with<B, T>(&self, endpoint: &str, params: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::GET, endpoint, Some(params)).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, endpoint, Some(body)).await
    }
}

/// Query parameters shared by the per-project GET endpoints.
#[derive(Debug, Serialize)]
struct ProjectParams<'a> {
    project_id: &'a str,
}
