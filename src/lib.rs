#![deny(missing_docs)]

//! # `wordpress_client`
//!
//! A WordPress REST API v2 client for Rust scripts and services.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordpress_client::{Client, WordPressConfig, types::CreatePost};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = WordPressConfig::new()
//!     .with_base_url("https://example.com/wp-json")
//!     .with_basic_auth("alice", "app-password");
//! let client = Client::with_config(cfg);
//!
//! let post = client
//!     .posts()
//!     .create(&CreatePost::new("Hello", "<p>First post.</p>"))
//!     .await?;
//! println!("created post {}", post["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`Client::new`] reads `WP_BASE_URL`, `WP_USERNAME` and `WP_PASSWORD`
//! from the environment. The [`Settings`] loader additionally merges a
//! JSON config file under the same dotted keys, with environment values
//! taking precedence.
//!
//! Without credentials the client can still call read-only endpoints.
//!
//! ## Records
//!
//! WordPress records (posts, categories, tags, media) pass through as
//! [`serde_json::Value`]s; only the fields this crate sets explicitly are
//! typed, as request-builder structs in [`types`].

/// HTTP client implementation
pub mod client;
/// Client configuration and the [`Config`] trait
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Dotted-key configuration loader
pub mod settings;
/// Request and query types
pub mod types;

pub use crate::client::Client;
pub use crate::config::{Config, WordPressAuth, WordPressConfig};
pub use crate::error::{WordPressError, WpErrorBody};
pub use crate::settings::Settings;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::media::*;
    pub use crate::types::posts::*;
    pub use crate::types::query::*;
    pub use crate::{Client, Settings, WordPressConfig, WordPressError};
}
