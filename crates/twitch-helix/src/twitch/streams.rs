//! Streams endpoints.
//!
//! Streams are returned sorted by current viewers, descending. Across
//! pages there may be duplicate or missing streams as viewers come and go.
//! Every call here is paginated and stores the returned cursor.

use super::client::{Collection, HelixClient};
use super::http::HttpClient;
use super::query::Query;
use super::types::{Page, Stream};
use super::validate::{self, StreamType, DEFAULT_FIRST};
use crate::error::Result;

/// Full parameter set of the streams endpoint.
///
/// Empty lists are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamsQuery {
    pub after: Option<String>,
    pub before: Option<String>,
    pub community_id: Vec<String>,
    pub first: u32,
    pub game_id: Vec<String>,
    pub language: Vec<String>,
    pub stream_type: StreamType,
    pub user_id: Vec<String>,
    pub user_login: Vec<String>,
}

impl Default for StreamsQuery {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            community_id: Vec::new(),
            first: DEFAULT_FIRST,
            game_id: Vec::new(),
            language: Vec::new(),
            stream_type: StreamType::All,
            user_id: Vec::new(),
            user_login: Vec::new(),
        }
    }
}

impl StreamsQuery {
    fn validate(&self) -> Result<()> {
        validate::one_direction(self.after.as_deref(), self.before.as_deref())?;
        validate::max_items("community_id", &self.community_id)?;
        validate::first(self.first)?;
        validate::max_items("game_id", &self.game_id)?;
        validate::max_items("language", &self.language)?;
        validate::max_items("user_id", &self.user_id)?;
        validate::max_items("user_login", &self.user_login)
    }

    fn to_query(&self) -> Query {
        Query::new()
            .push_opt("after", self.after.as_deref())
            .push_opt("before", self.before.as_deref())
            .push_all("community_id", &self.community_id)
            .push("first", self.first)
            .push_all("game_id", &self.game_id)
            .push_all("language", &self.language)
            .push("type", self.stream_type)
            .push_all("user_id", &self.user_id)
            .push_all("user_login", &self.user_login)
    }
}

/// Streams endpoints, obtained from [`HelixClient::streams`]
pub struct Streams<'a, H: HttpClient> {
    client: &'a HelixClient<H>,
}

impl<'a, H: HttpClient> Streams<'a, H> {
    pub(crate) fn new(client: &'a HelixClient<H>) -> Self {
        Self { client }
    }

    /// Cursor returned by the last streams call
    pub async fn cursor(&self) -> Option<String> {
        self.client.cursor(Collection::Streams).await
    }

    async fn fetch(&self, query: &Query) -> Result<Vec<Stream>> {
        let page: Page<Stream> = self.client.get_as("/streams", query).await?;
        self.client
            .set_cursor(Collection::Streams, page.cursor().map(str::to_string))
            .await;
        Ok(page.data)
    }

    /// Streams broadcast by up to 100 user IDs
    pub async fn get_by_user_id<S: AsRef<str>>(
        &self,
        user_ids: &[S],
        stream_type: StreamType,
    ) -> Result<Vec<Stream>> {
        validate::max_items("user_id", user_ids)?;

        let query = Query::new()
            .push_all("user_id", user_ids)
            .push("type", stream_type);
        self.fetch(&query).await
    }

    /// Streams broadcast by up to 100 login names
    pub async fn get_by_user_name<S: AsRef<str>>(
        &self,
        user_logins: &[S],
        stream_type: StreamType,
    ) -> Result<Vec<Stream>> {
        validate::max_items("user_login", user_logins)?;

        let query = Query::new()
            .push_all("user_login", user_logins)
            .push("type", stream_type);
        self.fetch(&query).await
    }

    /// Streams of up to 100 game IDs
    pub async fn get_by_game_id<S: AsRef<str>>(
        &self,
        game_ids: &[S],
        stream_type: StreamType,
    ) -> Result<Vec<Stream>> {
        validate::max_items("game_id", game_ids)?;

        let query = Query::new()
            .push_all("game_id", game_ids)
            .push("type", stream_type);
        self.fetch(&query).await
    }

    /// Streams in up to 100 languages
    pub async fn get_by_lang<S: AsRef<str>>(
        &self,
        languages: &[S],
        stream_type: StreamType,
        first: u32,
    ) -> Result<Vec<Stream>> {
        validate::first(first)?;
        validate::max_items("language", languages)?;

        let query = Query::new()
            .push_all("language", languages)
            .push("type", stream_type)
            .push("first", first);
        self.fetch(&query).await
    }

    /// Live streams, most viewers first
    pub async fn get_live_streams(&self, first: u32) -> Result<Vec<Stream>> {
        validate::first(first)?;

        let query = Query::new()
            .push("type", StreamType::Live)
            .push("first", first);
        self.fetch(&query).await
    }

    /// Streams of the given type
    pub async fn get_by_stream_type(
        &self,
        stream_type: StreamType,
        first: u32,
    ) -> Result<Vec<Stream>> {
        validate::first(first)?;

        let query = Query::new()
            .push("type", stream_type)
            .push("first", first);
        self.fetch(&query).await
    }

    /// Streams in up to 100 communities
    pub async fn get_by_community<S: AsRef<str>>(
        &self,
        community_ids: &[S],
        stream_type: StreamType,
        first: u32,
    ) -> Result<Vec<Stream>> {
        validate::first(first)?;
        validate::max_items("community_id", community_ids)?;

        let query = Query::new()
            .push_all("community_id", community_ids)
            .push("type", stream_type)
            .push("first", first);
        self.fetch(&query).await
    }

    /// Streams matching any combination of filters
    pub async fn get_streams(&self, query: &StreamsQuery) -> Result<Vec<Stream>> {
        query.validate()?;
        self.fetch(&query.to_query()).await
    }
}
