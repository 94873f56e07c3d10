use serde_json::Value;

use crate::{
    client::Client,
    config::Config,
    error::WordPressError,
    types::posts::{CreatePost, ListPosts, UpdatePost},
};

/// API resource for the `/wp/v2/posts` endpoints.
pub struct Posts<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Posts<'c, C> {
    /// Creates a new Posts resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists posts, in the order the server returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list(&self, query: &ListPosts) -> Result<Vec<Value>, WordPressError> {
        self.client
            .get_with_query("/wp/v2/posts", &query.to_query())
            .await
    }

    /// Fetches a single post by ID.
    ///
    /// # Errors
    ///
    /// Returns [`WordPressError::NotFound`] when the ID does not exist.
    pub async fn get(&self, post_id: u64) -> Result<Value, WordPressError> {
        self.client.get(&format!("/wp/v2/posts/{post_id}")).await
    }

    /// Creates a post and returns the created record, including its
    /// newly assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the body.
    pub async fn create(&self, body: &CreatePost) -> Result<Value, WordPressError> {
        tracing::info!(title = %body.title, status = %body.status, "creating post");
        self.client.post("/wp/v2/posts", body).await
    }

    /// Partially updates a post: only the fields set in `body` are sent,
    /// everything else is left untouched on the server.
    ///
    /// # Errors
    ///
    /// Returns [`WordPressError::NotFound`] when the ID does not exist.
    pub async fn update(&self, post_id: u64, body: &UpdatePost) -> Result<Value, WordPressError> {
        self.client
            .put(&format!("/wp/v2/posts/{post_id}"), body)
            .await
    }

    /// Deletes a post and returns the server's confirmation record.
    ///
    /// With `force` the post bypasses the trash and is removed
    /// irreversibly; otherwise it is moved to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`WordPressError::NotFound`] when the ID does not exist.
    pub async fn delete(&self, post_id: u64, force: bool) -> Result<Value, WordPressError> {
        tracing::info!(post_id, force, "deleting post");
        self.client
            .delete_with_query(&format!("/wp/v2/posts/{post_id}"), &[("force", force)])
            .await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Posts API resource.
    #[must_use]
    pub const fn posts(&self) -> Posts<'_, C> {
        Posts::new(self)
    }
}
