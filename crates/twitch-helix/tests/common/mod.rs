//! Common test utilities for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};
use twitch_helix::{ClientConfig, HelixClient, HttpClient, HttpResponse};

static TRACING: Once = Once::new();

/// Routes client logs to the test output when RUST_LOG is set
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Transport that answers requests in order from a script and
/// remembers the URLs it was asked for
#[derive(Clone, Default)]
pub struct ScriptedHttp {
    replies: Arc<Mutex<VecDeque<(u16, String)>>>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back((status, body.into()));
        self
    }

    pub fn reply_json(self, body: &Value) -> Self {
        self.reply(200, body.to_string())
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn get(&self, url: &str, _headers: &HeaderMap) -> anyhow::Result<HttpResponse> {
        self.urls.lock().unwrap().push(url.to_string());

        let (status, body) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted at {url}"))?;

        let remaining = 800 - self.urls.lock().unwrap().len();
        let mut headers = HeaderMap::new();
        headers.insert("Ratelimit-Limit", HeaderValue::from_static("800"));
        headers.insert("Ratelimit-Remaining", HeaderValue::from(remaining as u64));
        headers.insert("Ratelimit-Reset", HeaderValue::from_static("1700000060"));
        headers.insert("Date", HeaderValue::from_static("Tue, 14 Nov 2023 22:13:20 GMT"));

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Creates a client over a scripted transport
pub fn client(http: ScriptedHttp) -> HelixClient<ScriptedHttp> {
    init_tracing();
    HelixClient::with_http_client(ClientConfig::with_client_id("integration"), http)
}

/// A page of games named after their IDs
pub fn games_page(ids: &[&str], cursor: Option<&str>) -> Value {
    let data: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id, "name": format!("Game {id}"), "box_art_url": "" }))
        .collect();
    json!({ "data": data, "pagination": { "cursor": cursor } })
}

/// A page of live streams for the given user IDs
pub fn streams_page(user_ids: &[&str], cursor: Option<&str>) -> Value {
    let data: Vec<Value> = user_ids
        .iter()
        .map(|id| {
            json!({
                "id": format!("stream_{id}"),
                "user_id": id,
                "user_name": format!("Streamer{id}"),
                "game_id": "33214",
                "type": "live",
                "title": "Test Stream",
                "viewer_count": 100,
                "started_at": "2024-06-15T12:00:00Z",
                "language": "en",
                "thumbnail_url": ""
            })
        })
        .collect();
    json!({ "data": data, "pagination": { "cursor": cursor } })
}
