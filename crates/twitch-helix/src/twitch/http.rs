//! HTTP client abstraction for the Helix API
//!
//! The transport is a trait so the client can be driven by canned responses in tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::config::ClientConfig;

/// Trait for making HTTP GET requests
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Makes a GET request and returns the raw response.
    ///
    /// Non-2xx statuses are not errors at this level; Helix reports
    /// failures in the JSON body.
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse>;
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns a header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client with certificate validation on
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client honoring the TLS settings of the configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate validation is disabled for Helix requests");
        }

        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { inner })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        let response = self
            .inner
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
