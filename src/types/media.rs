use serde::Serialize;

/// Metadata applied to an uploaded media item.
///
/// When any field is set, the upload is followed by one metadata update on
/// the created attachment; when all are `None` the upload is a single call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaFields {
    /// Media title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption shown under the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Alternative text for accessibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl MediaFields {
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none() && self.caption.is_none() && self.alt_text.is_none()
    }
}
