use serde_json::Value;

use crate::{client::Client, config::Config, error::WordPressError, types::query::Page};

/// API resource for the `/wp/v2/categories` endpoints.
pub struct Categories<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Categories<'c, C> {
    /// Creates a new Categories resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists categories, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list(&self, page: &Page) -> Result<Vec<Value>, WordPressError> {
        self.client.get_with_query("/wp/v2/categories", page).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Categories API resource.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_, C> {
        Categories::new(self)
    }
}
