use serde::Serialize;

/// Query for listing posts via `GET /wp/v2/posts`.
///
/// `limit` maps to the API's `per_page` parameter. Category and tag filters
/// are sent as repeated `categories[]=` / `tags[]=` parameters. The caller
/// supplies `page` explicitly; no cursor is held across calls.
#[derive(Debug, Clone)]
pub struct ListPosts {
    /// Number of posts per page (API `per_page`).
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
    /// Full-text search term, sent only when set.
    pub search: Option<String>,
    /// Restrict to posts in any of these category IDs.
    pub categories: Vec<u64>,
    /// Restrict to posts with any of these tag IDs.
    pub tags: Vec<u64>,
    /// Post status filter (`publish`, `draft`, ...), sent only when set.
    pub status: Option<String>,
}

impl Default for ListPosts {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            search: None,
            categories: Vec::new(),
            tags: Vec::new(),
            status: None,
        }
    }
}

impl ListPosts {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("per_page", self.limit.to_string()),
            ("page", self.page.to_string()),
        ];
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        for id in &self.categories {
            query.push(("categories[]", id.to_string()));
        }
        for id in &self.tags {
            query.push(("tags[]", id.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}

/// Body for `POST /wp/v2/posts`. Optional fields are omitted from the
/// serialized body entirely.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body content.
    pub content: String,
    /// Post status; new posts default to `draft`.
    pub status: String,
    /// Post excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Category IDs to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    /// Tag IDs to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// Featured image attachment ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

impl CreatePost {
    /// Creates a draft post request with the given title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: "draft".into(),
            excerpt: None,
            categories: None,
            tags: None,
            featured_media: None,
        }
    }
}

/// Body for updating a post. Every field is optional and only supplied
/// fields are serialized, so the server performs a partial update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePost {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Replacement category IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    /// Replacement tag IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// New featured image attachment ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}
