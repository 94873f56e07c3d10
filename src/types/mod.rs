//! Request-builder and query types for the WordPress resource layer.
//!
//! Response records stay generic [`serde_json::Value`]s; only the fields
//! this crate sets explicitly get typed request structs.

/// Media upload metadata
pub mod media;
/// Post request builders and list query
pub mod posts;
/// Shared pagination and comment queries
pub mod query;

pub use media::MediaFields;
pub use posts::{CreatePost, ListPosts, UpdatePost};
pub use query::{ListComments, Page};
