use serde_json::Value;

use crate::{client::Client, config::Config, error::WordPressError, types::query::Page};

/// API resource for the `/wp/v2/tags` endpoints.
pub struct Tags<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Tags<'c, C> {
    /// Creates a new Tags resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists tags, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list(&self, page: &Page) -> Result<Vec<Value>, WordPressError> {
        self.client.get_with_query("/wp/v2/tags", page).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Tags API resource.
    #[must_use]
    pub const fn tags(&self) -> Tags<'_, C> {
        Tags::new(self)
    }
}
