use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::WordPressError;
use crate::settings::Settings;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("wordpress_client/", env!("CARGO_PKG_VERSION"));

/// Environment variable naming the site base URL.
pub const ENV_BASE_URL: &str = "WP_BASE_URL";
/// Environment variable naming the Basic auth username.
pub const ENV_USERNAME: &str = "WP_USERNAME";
/// Environment variable naming the Basic auth password.
pub const ENV_PASSWORD: &str = "WP_PASSWORD";

/// Authentication material for a WordPress site.
///
/// Without credentials the client still works against read-only endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPressAuth {
    /// HTTP Basic auth, typically an application password.
    Basic {
        /// WordPress account name.
        username: String,
        /// Account or application password.
        password: String,
    },
    /// Unauthenticated access.
    None,
}

/// Configuration for the stock WordPress client.
///
/// The base URL is the site's REST root, typically ending in `/wp-json`.
#[derive(Debug, Clone)]
pub struct WordPressConfig {
    base_url: String,
    auth: WordPressAuth,
    user_agent: String,
}

impl Default for WordPressConfig {
    fn default() -> Self {
        let username = std::env::var(ENV_USERNAME).ok();
        let password = std::env::var(ENV_PASSWORD).ok();

        let auth = match (username, password) {
            (Some(username), Some(password)) => WordPressAuth::Basic { username, password },
            _ => WordPressAuth::None,
        };

        Self {
            base_url: std::env::var(ENV_BASE_URL).unwrap_or_default(),
            auth,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl WordPressConfig {
    /// Creates a config from `WP_BASE_URL`, `WP_USERNAME` and `WP_PASSWORD`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from a loaded [`Settings`] tree, reading the keys
    /// the `WP_`-prefixed environment variables map to: `base.url`,
    /// `username` and `password`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let auth = match (settings.get_str("username"), settings.get_str("password")) {
            (Some(username), Some(password)) => WordPressAuth::Basic {
                username: username.to_owned(),
                password: password.to_owned(),
            },
            _ => WordPressAuth::None,
        };

        Self {
            base_url: settings.get_str("base.url").unwrap_or_default().to_owned(),
            auth,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }

    /// Replaces the base URL. A trailing slash is trimmed so resource paths
    /// can always start with `/`.
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Sets HTTP Basic auth credentials.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = WordPressAuth::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Drops any configured credentials.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.auth = WordPressAuth::None;
        self
    }

    /// Replaces the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Whether Basic auth credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        matches!(self.auth, WordPressAuth::Basic { .. })
    }
}

/// Provides authentication and URL construction for a [`Client`](crate::Client).
///
/// Implement this to point the client at something other than a stock
/// WordPress site (proxies, test fixtures).
pub trait Config: Send + Sync {
    /// Headers attached to every request.
    fn headers(&self) -> HeaderMap;
    /// Joins the base URL with a resource path.
    fn url(&self, path: &str) -> String;
    /// Query parameters attached to every request.
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates the configuration before a request goes out.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot produce a usable
    /// request, e.g. an empty base URL.
    fn validate(&self) -> Result<(), WordPressError>;
}

impl Config for WordPressConfig {
    fn headers(&self) -> HeaderMap {
        let mut h = HeaderMap::new();

        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(ua) = HeaderValue::from_str(&self.user_agent) {
            h.insert(USER_AGENT, ua);
        }

        if let WordPressAuth::Basic { username, password } = &self.auth {
            let token = BASE64.encode(format!("{username}:{password}"));
            let value = format!("Basic {token}");
            if let Ok(v) = HeaderValue::from_str(&value) {
                h.insert(AUTHORIZATION, v);
            }
        }

        h
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate(&self) -> Result<(), WordPressError> {
        if self.base_url.trim().is_empty() {
            return Err(WordPressError::Config(format!(
                "missing base URL: set {ENV_BASE_URL} or call with_base_url"
            )));
        }
        Ok(())
    }
}
