use serde_json::Value;

use crate::{client::Client, config::Config, error::WordPressError, types::query::ListComments};

/// API resource for the `/wp/v2/comments` endpoints.
pub struct Comments<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Comments<'c, C> {
    /// Creates a new Comments resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists comments, optionally filtered to one post.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list(&self, query: &ListComments) -> Result<Vec<Value>, WordPressError> {
        self.client.get_with_query("/wp/v2/comments", query).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Comments API resource.
    #[must_use]
    pub const fn comments(&self) -> Comments<'_, C> {
        Comments::new(self)
    }
}
