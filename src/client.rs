use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error, error::WordPressError};

/// WordPress REST API client.
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and URL construction; [`WordPressConfig`](crate::WordPressConfig)
/// is the stock implementation. Each call is one independent HTTP
/// round-trip: no retries, no session state, no pagination cursors.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::WordPressConfig> {
    /// Creates a client configured from the environment:
    /// `WP_BASE_URL`, `WP_USERNAME` and `WP_PASSWORD`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::WordPressConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one, for timeouts or proxies.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, WordPressError> {
        self.config.validate()?;
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn get_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, WordPressError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        self.config.validate()?;
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .query(query)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: &I) -> Result<O, WordPressError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        self.config.validate()?;
        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .json(body)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn put<I, O>(&self, path: &str, body: &I) -> Result<O, WordPressError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        self.config.validate()?;
        let request = self
            .http
            .put(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .json(body)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn delete_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, WordPressError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        self.config.validate()?;
        let request = self
            .http
            .delete(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .query(query)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn post_multipart<O: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<O, WordPressError> {
        self.config.validate()?;
        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers())
            .query(&self.config.query())
            .multipart(form)
            .build()?;
        self.execute(request).await
    }

    async fn execute<O: DeserializeOwned>(&self, request: reqwest::Request) -> Result<O, WordPressError> {
        let bytes = self.execute_raw(request).await?;
        let parsed: O = serde_json::from_slice(&bytes).map_err(|e| error::map_deser(&e, &bytes))?;
        Ok(parsed)
    }

    async fn execute_raw(&self, request: reqwest::Request) -> Result<bytes::Bytes, WordPressError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "request succeeded");
            Ok(bytes)
        } else {
            tracing::warn!(%method, %url, status = status.as_u16(), "request failed");
            Err(error::from_response(status, &bytes))
        }
    }
}
