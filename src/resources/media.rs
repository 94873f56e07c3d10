use std::path::Path;

use serde_json::Value;

use crate::{client::Client, config::Config, error::WordPressError, types::media::MediaFields};

/// API resource for the `/wp/v2/media` endpoints.
pub struct Media<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Media<'c, C> {
    /// Creates a new Media resource.
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Uploads a local file to the media library and returns the created
    /// media record, including its `source_url`.
    ///
    /// The file is read before any network I/O, so a missing or unreadable
    /// path fails with [`WordPressError::File`] without touching the
    /// server. The MIME type is guessed from the file extension. When any
    /// of `fields` is set, the upload is followed by one metadata update
    /// on the created attachment.
    ///
    /// # Errors
    ///
    /// [`WordPressError::File`] for local read failures, otherwise the
    /// usual transport/API errors.
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        fields: &MediaFields,
    ) -> Result<Value, WordPressError> {
        let file_path = file_path.as_ref();
        let data = tokio::fs::read(file_path)
            .await
            .map_err(|source| WordPressError::File {
                path: file_path.to_path_buf(),
                source,
            })?;

        let filename = file_path
            .file_name()
            .map_or_else(|| "upload.bin".to_owned(), |n| n.to_string_lossy().into_owned());
        let mime = mime_for_path(file_path);
        tracing::info!(file = %file_path.display(), mime, bytes = data.len(), "uploading media");

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(mime)
            .map_err(|e| WordPressError::Config(format!("invalid MIME type {mime}: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let created: Value = self.client.post_multipart("/wp/v2/media", form).await?;
        if fields.is_empty() {
            return Ok(created);
        }

        let id = created
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| WordPressError::Parse("media record is missing a numeric id".into()))?;
        self.client.post(&format!("/wp/v2/media/{id}"), fields).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Media API resource.
    #[must_use]
    pub const fn media(&self) -> Media<'_, C> {
        Media::new(self)
    }
}

/// MIME type by file extension, covering the formats WordPress accepts
/// out of the box. Unknown extensions fall back to octet-stream.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("zip") => "application/zip",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
