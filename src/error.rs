use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the WordPress client.
///
/// Every failure propagates to the caller unmodified; the client never
/// retries or suppresses an error on its own.
#[derive(Debug, Error)]
pub enum WordPressError {
    /// Network-level failure: DNS, connection refused, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status other than 404.
    #[error("API error (HTTP {status}): {body:?}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Parsed WordPress error payload, when the body was one.
        body: Option<WpErrorBody>,
    },

    /// The server answered HTTP 404 for the requested resource.
    #[error("not found: {body:?}")]
    NotFound {
        /// Parsed WordPress error payload, when the body was one.
        body: Option<WpErrorBody>,
    },

    /// A local file needed for config loading or media upload was
    /// missing or unreadable.
    #[error("file error for {}: {source}", path.display())]
    File {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, from a config file or a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Missing or invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WordPressError {
    /// HTTP status carried by this error, when it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Error payload shape returned by the WordPress REST API, e.g.
/// `{"code":"rest_post_invalid_id","message":"Invalid post ID.","data":{"status":404}}`.
///
/// All fields are optional so unexpected payloads still surface instead of
/// turning into a secondary parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct WpErrorBody {
    /// Machine-readable WordPress error code.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Extra data, usually `{"status": <http status>}`.
    pub data: Option<serde_json::Value>,
}

/// Maps a non-2xx response to the error taxonomy, keeping whatever error
/// payload the server sent. 404 gets its own variant.
pub(crate) fn from_response(status: reqwest::StatusCode, bytes: &[u8]) -> WordPressError {
    let body = serde_json::from_slice::<WpErrorBody>(bytes).ok();
    if status == reqwest::StatusCode::NOT_FOUND {
        WordPressError::NotFound { body }
    } else {
        WordPressError::Api {
            status: status.as_u16(),
            body,
        }
    }
}

/// Wraps a deserialization failure together with a snippet of the offending
/// body, which is usually the only clue worth having.
pub(crate) fn map_deser(e: &serde_json::Error, bytes: &[u8]) -> WordPressError {
    let snippet: String = String::from_utf8_lossy(bytes).chars().take(200).collect();
    WordPressError::Parse(format!("{e}: {snippet}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        let body = br#"{"code":"rest_post_invalid_id","message":"Invalid post ID.","data":{"status":404}}"#;
        let err = from_response(reqwest::StatusCode::NOT_FOUND, body);
        match err {
            WordPressError::NotFound { body: Some(b) } => {
                assert_eq!(b.code.as_deref(), Some("rest_post_invalid_id"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_still_carries_status() {
        let err = from_response(reqwest::StatusCode::UNAUTHORIZED, b"<html>nope</html>");
        assert_eq!(err.status(), Some(401));
        match err {
            WordPressError::Api { body, .. } => assert!(body.is_none()),
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
