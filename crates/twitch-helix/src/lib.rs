//! Client for the Twitch Helix games, streams and users endpoints.
//!
//! ```no_run
//! # async fn run() -> twitch_helix::Result<()> {
//! use twitch_helix::{HelixClient, StreamType};
//!
//! let client = HelixClient::new("my-client-id");
//! let live = client.streams().get_by_lang(&["en"], StreamType::Live, 20).await?;
//! let next = client.streams().cursor().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod twitch;

#[cfg(test)]
mod testutil;

pub use config::{ClientConfig, RetryConfig};
pub use error::{Error, ErrorKind, Result};
pub use twitch::{
    Follow, FollowsPage, Game, HelixClient, HttpClient, HttpResponse, Page, Pagination,
    RateLimit, Stream, StreamType, StreamsQuery, User,
};
