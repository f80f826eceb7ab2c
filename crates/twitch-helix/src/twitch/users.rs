use super::client::{Collection, HelixClient};
use super::http::HttpClient;
use super::query::Query;
use super::types::{Follow, FollowsPage, Page, User};
use super::validate;
use crate::error::{Error, Result};

/// Users and follows endpoints, obtained from [`HelixClient::users`]
pub struct Users<'a, H: HttpClient> {
    client: &'a HelixClient<H>,
}

impl<'a, H: HttpClient> Users<'a, H> {
    pub(crate) fn new(client: &'a HelixClient<H>) -> Self {
        Self { client }
    }

    /// Cursor returned by the last follows listing
    pub async fn cursor(&self) -> Option<String> {
        self.client.cursor(Collection::Users).await
    }

    /// Gets users by ID (1 to 100 IDs)
    pub async fn get_user_by_id<S: AsRef<str>>(&self, user_ids: &[S]) -> Result<Vec<User>> {
        validate::lookup("id", user_ids)?;

        let query = Query::new().push_all("id", user_ids);
        let page: Page<User> = self.client.get_as("/users", &query).await?;
        Ok(page.data)
    }

    /// Gets users by login name (1 to 100 names)
    pub async fn get_user_by_name<S: AsRef<str>>(&self, logins: &[S]) -> Result<Vec<User>> {
        validate::lookup("login", logins)?;

        let query = Query::new().push_all("login", logins);
        let page: Page<User> = self.client.get_as("/users", &query).await?;
        Ok(page.data)
    }

    /// Checks whether `from_id` follows `to_id`.
    ///
    /// Both IDs or neither must be given. Returns `None` when the server
    /// reports no relationship (`total` of zero).
    pub async fn user_follows_user(
        &self,
        from_id: Option<&str>,
        to_id: Option<&str>,
    ) -> Result<Option<FollowsPage>> {
        let from_id = validate::present(from_id);
        let to_id = validate::present(to_id);
        if from_id.is_some() != to_id.is_some() {
            let param = if from_id.is_none() { "from_id" } else { "to_id" };
            return Err(Error::invalid(
                param,
                "must supply both \"to_id\" and \"from_id\" users",
            ));
        }

        let query = Query::new()
            .push_opt("from_id", from_id)
            .push_opt("to_id", to_id);
        let page: FollowsPage = self.client.get_as("/users/follows", &query).await?;

        Ok((page.total > 0).then_some(page))
    }

    /// Lists users following `to_id`
    pub async fn get_following(
        &self,
        after: Option<&str>,
        before: Option<&str>,
        first: u32,
        to_id: Option<&str>,
    ) -> Result<Vec<Follow>> {
        let to_id = validate::required("to_id", to_id)?;
        validate::first(first)?;
        validate::one_direction(after, before)?;

        let query = Query::new()
            .push_opt("after", after)
            .push_opt("before", before)
            .push("first", first)
            .push("to_id", to_id);
        self.fetch_follows(&query).await
    }

    /// Lists users followed by `from_id`
    pub async fn get_followers(
        &self,
        after: Option<&str>,
        before: Option<&str>,
        first: u32,
        from_id: Option<&str>,
    ) -> Result<Vec<Follow>> {
        let from_id = validate::required("from_id", from_id)?;
        validate::first(first)?;
        validate::one_direction(after, before)?;

        let query = Query::new()
            .push_opt("after", after)
            .push_opt("before", before)
            .push("first", first)
            .push("from_id", from_id);
        self.fetch_follows(&query).await
    }

    async fn fetch_follows(&self, query: &Query) -> Result<Vec<Follow>> {
        let page: FollowsPage = self.client.get_as("/users/follows", query).await?;
        self.client
            .set_cursor(Collection::Users, page.cursor().map(str::to_string))
            .await;
        Ok(page.data)
    }
}
