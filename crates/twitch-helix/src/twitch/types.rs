use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a Twitch game (category)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub box_art_url: String,
    #[serde(default)]
    pub igdb_id: String,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Represents a live stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub community_ids: Vec<String>,
    /// "live", "vodcast" or an empty string on error
    #[serde(rename = "type", default)]
    pub stream_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: i64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_mature: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stream {
    /// Returns how long the stream has been running at `now`
    pub fn uptime(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.started_at)
    }
}

/// Represents a Twitch user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    /// "staff", "admin", "global_mod" or ""
    #[serde(rename = "type", default)]
    pub user_type: String,
    /// "partner", "affiliate" or ""
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub view_count: i64,
    /// Only returned when the token carries the `user:read:email` scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A follow relationship between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Follow {
    pub from_id: String,
    #[serde(default)]
    pub from_login: String,
    #[serde(default)]
    pub from_name: String,
    pub to_id: String,
    #[serde(default)]
    pub to_login: String,
    #[serde(default)]
    pub to_name: String,
    pub followed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Helix API pagination
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A page of results from a Helix endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Returns the cursor for the next request, if the server sent one
    pub fn cursor(&self) -> Option<&str> {
        self.pagination.as_ref().and_then(|p| p.cursor.as_deref())
    }
}

/// Response from the follows endpoint, which also reports a total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowsPage {
    #[serde(default)]
    pub total: u64,
    pub data: Vec<Follow>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl FollowsPage {
    /// Returns the cursor for the next request, if the server sent one
    pub fn cursor(&self) -> Option<&str> {
        self.pagination.as_ref().and_then(|p| p.cursor.as_deref())
    }
}
