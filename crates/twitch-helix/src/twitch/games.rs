use super::client::{Collection, HelixClient};
use super::http::HttpClient;
use super::query::Query;
use super::types::{Game, Page};
use super::validate;
use crate::error::Result;

/// Games endpoints, obtained from [`HelixClient::games`]
pub struct Games<'a, H: HttpClient> {
    client: &'a HelixClient<H>,
}

impl<'a, H: HttpClient> Games<'a, H> {
    pub(crate) fn new(client: &'a HelixClient<H>) -> Self {
        Self { client }
    }

    /// Cursor returned by the last paginated games call.
    ///
    /// Only pass it back to the same endpoint it came from.
    pub async fn cursor(&self) -> Option<String> {
        self.client.cursor(Collection::Games).await
    }

    /// Gets games sorted by number of current viewers, most popular first.
    ///
    /// Returns the whole page and stores its cursor.
    pub async fn get_top(
        &self,
        after: Option<&str>,
        before: Option<&str>,
        first: u32,
    ) -> Result<Page<Game>> {
        validate::first(first)?;
        validate::one_direction(after, before)?;

        let query = Query::new()
            .push_opt("after", after)
            .push_opt("before", before)
            .push("first", first);

        let page: Page<Game> = self.client.get_as("/games/top", &query).await?;
        self.client
            .set_cursor(Collection::Games, page.cursor().map(str::to_string))
            .await;
        Ok(page)
    }

    /// Gets games by ID (1 to 100 IDs)
    pub async fn get_by_id<S: AsRef<str>>(&self, game_ids: &[S]) -> Result<Vec<Game>> {
        validate::lookup("id", game_ids)?;

        let query = Query::new().push_all("id", game_ids);
        let page: Page<Game> = self.client.get_as("/games", &query).await?;
        Ok(page.data)
    }

    /// Gets games by exact name (1 to 100 names)
    pub async fn get_by_name<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Game>> {
        validate::lookup("name", names)?;

        let query = Query::new().push_all("name", names);
        let page: Page<Game> = self.client.get_as("/games", &query).await?;
        Ok(page.data)
    }
}
