//! Test fixtures
//!
//! Pre-built models and Helix response bodies.

use serde::Serialize;
use serde_json::{json, Value};

use super::builders::{FollowBuilder, StreamBuilder};
use crate::twitch::{Follow, Stream};

/// Three streams sorted by viewers, as Helix returns them
pub fn sample_streams() -> Vec<Stream> {
    vec![
        StreamBuilder::new()
            .id("s1")
            .user_id("1")
            .streamer("BigStreamer")
            .game_id("33214")
            .viewers(50000)
            .started_hours_ago(3)
            .build(),
        StreamBuilder::new()
            .id("s2")
            .user_id("2")
            .streamer("MediumStreamer")
            .game_id("27471")
            .viewers(5000)
            .language("de")
            .build(),
        StreamBuilder::new()
            .id("s3")
            .user_id("3")
            .streamer("SmallStreamer")
            .game_id("516575")
            .viewers(500)
            .vodcast()
            .build(),
    ]
}

/// Three users following `to_id`, most recent first
pub fn sample_follows(to_id: &str) -> Vec<Follow> {
    (1..=3)
        .map(|i| {
            FollowBuilder::new()
                .from(i.to_string())
                .to(to_id)
                .followed_days_ago(i)
                .build()
        })
        .collect()
}

/// A `{data, pagination}` body
pub fn page_body<T: Serialize>(data: &[T], cursor: Option<&str>) -> Value {
    match cursor {
        Some(c) => json!({ "data": data, "pagination": { "cursor": c } }),
        None => json!({ "data": data, "pagination": {} }),
    }
}

/// A follows body, which also carries `total`
pub fn follows_body(total: u64, data: &[Follow], cursor: Option<&str>) -> Value {
    let mut body = page_body(data, cursor);
    body["total"] = json!(total);
    body
}

/// An error body as Helix sends it
pub fn error_body(error: &str, status: u16, message: &str) -> Value {
    json!({ "error": error, "status": status, "message": message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_streams_are_sorted_by_viewers() {
        let streams = sample_streams();
        assert!(streams[0].viewer_count > streams[1].viewer_count);
        assert!(streams[1].viewer_count > streams[2].viewer_count);
    }

    #[test]
    fn page_body_with_cursor() {
        let body = page_body(&["a"], Some("abc"));
        assert_eq!(body["pagination"]["cursor"], "abc");
        assert_eq!(body["data"][0], "a");
    }

    #[test]
    fn follows_body_has_total() {
        let body = follows_body(7, &sample_follows("42"), None);
        assert_eq!(body["total"], 7);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }
}
