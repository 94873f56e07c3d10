use serde_json::Value;

use crate::{client::Client, config::Config, error::WordPressError, types::query::Page};

/// API resource for the `/wp/v2/users` endpoints.
pub struct Users<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Users<'c, C> {
    /// Creates a new Users resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists users, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list(&self, page: &Page) -> Result<Vec<Value>, WordPressError> {
        self.client.get_with_query("/wp/v2/users", page).await
    }

    /// Fetches the record of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; unauthenticated clients get
    /// an [`WordPressError::Api`] with HTTP 401.
    pub async fn me(&self) -> Result<Value, WordPressError> {
        self.client.get("/wp/v2/users/me").await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Users API resource.
    #[must_use]
    pub const fn users(&self) -> Users<'_, C> {
        Users::new(self)
    }
}
