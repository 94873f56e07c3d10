//! API resource implementations, one module per WordPress resource.
//!
//! Each resource is a borrow of the [`Client`](crate::Client) reached
//! through an accessor such as `client.posts()`. Response records are
//! generic [`serde_json::Value`]s; the API's schema is passed through
//! untouched.

/// Categories taxonomy resource.
pub mod categories;
/// Comments resource.
pub mod comments;
/// Media library resource.
pub mod media;
/// Posts resource.
pub mod posts;
/// Tags taxonomy resource.
pub mod tags;
/// Users resource.
pub mod users;

pub use categories::Categories;
pub use comments::Comments;
pub use media::Media;
pub use posts::Posts;
pub use tags::Tags;
pub use users::Users;
