use serde::Serialize;

/// Pagination query shared by the simple list endpoints (categories, tags,
/// users). `limit` maps to the API's `per_page` parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Number of records per page (API `per_page`).
    #[serde(rename = "per_page")]
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 10, page: 1 }
    }
}

/// Query for listing comments, optionally filtered to one post.
#[derive(Debug, Clone, Serialize)]
pub struct ListComments {
    /// Restrict to comments on this post.
    #[serde(rename = "post", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    /// Number of comments per page (API `per_page`).
    #[serde(rename = "per_page")]
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
}

impl Default for ListComments {
    fn default() -> Self {
        Self {
            post_id: None,
            limit: 10,
            page: 1,
        }
    }
}
