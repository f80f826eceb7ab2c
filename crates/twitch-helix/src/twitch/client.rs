use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::games::Games;
use super::http::{HttpClient, ReqwestClient};
use super::query::Query;
use super::rate_limit::RateLimit;
use super::streams::Streams;
use super::users::Users;
use crate::config::{ClientConfig, RetryConfig};
use crate::error::{Error, Result};

/// Resource collection owning a cursor slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collection {
    Games,
    Streams,
    Users,
}

/// Last cursor returned to each collection
#[derive(Debug, Clone, Default)]
struct CursorSlots {
    games: Option<String>,
    streams: Option<String>,
    users: Option<String>,
}

impl CursorSlots {
    fn get(&self, collection: Collection) -> Option<&String> {
        match collection {
            Collection::Games => self.games.as_ref(),
            Collection::Streams => self.streams.as_ref(),
            Collection::Users => self.users.as_ref(),
        }
    }

    fn slot(&mut self, collection: Collection) -> &mut Option<String> {
        match collection {
            Collection::Games => &mut self.games,
            Collection::Streams => &mut self.streams,
            Collection::Users => &mut self.users,
        }
    }
}

/// Twitch Helix API client
///
/// Generic over the HTTP client implementation for testability. Clones
/// share credentials, the rate-limit snapshot and cursor slots.
pub struct HelixClient<H: HttpClient = ReqwestClient> {
    http: H,
    base_url: String,
    retry: RetryConfig,
    client_id: Arc<RwLock<Option<String>>>,
    access_token: Arc<RwLock<Option<String>>>,
    rate_limit: Arc<RwLock<Option<RateLimit>>>,
    cursors: Arc<RwLock<CursorSlots>>,
}

impl HelixClient<ReqwestClient> {
    /// Creates a client for the given client ID with default settings
    pub fn new(client_id: impl Into<String>) -> Self {
        Self::with_http_client(
            ClientConfig::with_client_id(client_id),
            ReqwestClient::new(),
        )
    }

    /// Creates a client from a configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = ReqwestClient::from_config(&config)?;
        Ok(Self::with_http_client(config, http))
    }
}

impl<H: HttpClient> HelixClient<H> {
    /// Creates a client with a custom HTTP implementation
    pub fn with_http_client(config: ClientConfig, http: H) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry,
            client_id: Arc::new(RwLock::new(config.client_id)),
            access_token: Arc::new(RwLock::new(config.access_token)),
            rate_limit: Arc::new(RwLock::new(None)),
            cursors: Arc::new(RwLock::new(CursorSlots::default())),
        }
    }

    /// Sets the client ID sent with every request
    pub async fn set_auth(&self, client_id: impl Into<String>) {
        *self.client_id.write().await = Some(client_id.into());
    }

    /// Sets the OAuth token sent as a bearer token
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = Some(token.into());
    }

    /// Forgets the client ID and token
    pub async fn clear_auth(&self) {
        *self.client_id.write().await = None;
        *self.access_token.write().await = None;
    }

    /// Returns the rate-limit snapshot of the most recent response
    pub async fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit.read().await.clone()
    }

    /// Games endpoints
    pub fn games(&self) -> Games<'_, H> {
        Games::new(self)
    }

    /// Streams endpoints
    pub fn streams(&self) -> Streams<'_, H> {
        Streams::new(self)
    }

    /// Users and follows endpoints
    pub fn users(&self) -> Users<'_, H> {
        Users::new(self)
    }

    pub(crate) async fn cursor(&self, collection: Collection) -> Option<String> {
        self.cursors.read().await.get(collection).cloned()
    }

    pub(crate) async fn set_cursor(&self, collection: Collection, cursor: Option<String>) {
        *self.cursors.write().await.slot(collection) = cursor;
    }

    /// Builds the headers for a request
    async fn build_headers(&self) -> Result<HeaderMap> {
        let client_id = self
            .client_id
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::Auth("No client ID set".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "Client-ID",
            HeaderValue::from_str(&client_id)
                .map_err(|_| Error::Auth("Client ID is not a valid header value".to_string()))?,
        );

        if let Some(token) = self.access_token.read().await.as_deref() {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                    Error::Auth("Access token is not a valid header value".to_string())
                })?,
            );
        }

        Ok(headers)
    }

    /// Makes a GET request to the Helix API and returns the JSON body.
    ///
    /// Every response updates the rate-limit snapshot. A body that is not
    /// JSON is retried according to the retry configuration; anything else
    /// fails immediately.
    pub async fn get(&self, path: &str, query: &Query) -> Result<Value> {
        let headers = self.build_headers().await?;
        let url = query.to_url(&format!("{}{}", self.base_url, path));
        let max_attempts = self.retry.max_attempts.max(1);

        tracing::debug!(%url, "Helix GET");

        let mut attempt = 0;
        loop {
            attempt += 1;

            let response = match self.http.get(&url, &headers).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!(%url, "Helix request failed: {:#}", e);
                    return Err(Error::Transport(e));
                }
            };

            let snapshot = RateLimit::from_response(&response)?;
            tracing::debug!(
                limit = snapshot.limit,
                remaining = snapshot.remaining,
                reset = snapshot.reset,
                "Rate limit"
            );
            *self.rate_limit.write().await = Some(snapshot);

            match serde_json::from_str::<Value>(&response.body) {
                Ok(body) => {
                    check_api_error(&body)?;
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(
                        %url,
                        attempt,
                        status = response.status,
                        body = %response.body,
                        "Malformed JSON response: {}",
                        e
                    );
                    if attempt >= max_attempts {
                        return Err(Error::MalformedJson {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    tokio::time::sleep(self.retry.delay()).await;
                }
            }
        }
    }

    /// Makes a GET request and deserializes the body
    pub(crate) async fn get_as<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let body = self.get(path, query).await?;
        serde_json::from_value(body).map_err(Error::Decode)
    }
}

impl<H: HttpClient + Clone> Clone for HelixClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            retry: self.retry.clone(),
            client_id: self.client_id.clone(),
            access_token: self.access_token.clone(),
            rate_limit: self.rate_limit.clone(),
            cursors: self.cursors.clone(),
        }
    }
}

/// Fails if the body carries a truthy `error` field
fn check_api_error(body: &Value) -> Result<()> {
    match body.get("error") {
        Some(error) if is_truthy(error) => Err(Error::Api {
            error: value_to_string(error),
            status: body.get("status").and_then(Value::as_i64),
            message: body.get("message").map(value_to_string).unwrap_or_default(),
        }),
        _ => Ok(()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
