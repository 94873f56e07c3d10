use std::path::Path;

use serde_json::{Map, Value};

use crate::error::WordPressError;

/// Default environment variable prefix scanned by [`Settings::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "WP_";

/// In-memory configuration tree addressed by dotted keys.
///
/// Entries come from prefixed environment variables, from a JSON file, or
/// from explicit [`set`](Settings::set) calls. The merge policy is fixed:
/// **environment values override file values**. `load_from_file` only fills
/// in keys that are not already present, so loading env-then-file and
/// file-then-env produce the same tree.
///
/// `WP_BASE_URL=https://example.com/wp-json` becomes the entry
/// `base.url = "https://example.com/wp-json"`.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: Map<String, Value>,
}

impl Settings {
    /// Creates an empty settings tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a settings tree from `WP_`-prefixed environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut settings = Self::new();
        settings.load_from_env(DEFAULT_ENV_PREFIX);
        settings
    }

    /// Scans the process environment for variables under `prefix` and
    /// stores each as a dotted-key string entry: the prefix is stripped,
    /// the rest lowercased, and `_` segments become path separators.
    ///
    /// Missing variables are not an error; nothing is removed.
    pub fn load_from_env(&mut self, prefix: &str) {
        for (name, value) in std::env::vars() {
            if let Some(rest) = name.strip_prefix(prefix) {
                if rest.is_empty() {
                    continue;
                }
                let key = rest.to_lowercase().replace('_', ".");
                self.set(&key, Value::String(value));
            }
        }
        tracing::debug!(prefix, "loaded settings from environment");
    }

    /// Merges a JSON file into the tree without overwriting existing
    /// entries, so anything already loaded from the environment wins.
    ///
    /// # Errors
    ///
    /// [`WordPressError::File`] when the file is missing or unreadable,
    /// [`WordPressError::Parse`] when it is not a JSON object.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), WordPressError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WordPressError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| WordPressError::Parse(format!("{}: {e}", path.display())))?;
        let Value::Object(incoming) = value else {
            return Err(WordPressError::Parse(format!(
                "{}: top-level value must be a JSON object",
                path.display()
            )));
        };
        merge_missing(&mut self.root, incoming);
        tracing::debug!(path = %path.display(), "loaded settings from file");
        Ok(())
    }

    /// Writes the tree as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// [`WordPressError::File`] when the path cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), WordPressError> {
        let path = path.as_ref();
        let file_err = |source| WordPressError::File {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(file_err)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .map_err(|e| WordPressError::Parse(e.to_string()))?;
        std::fs::write(path, text).map_err(file_err)
    }

    /// Dotted-path lookup. Returns `None` when any segment is missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = self.root.get(key.split('.').next()?)?;
        for segment in key.split('.').skip(1) {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Dotted-path lookup of a string entry.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Dotted-path insert, creating intermediate objects as needed. An
    /// existing non-object value on the path is replaced by an object.
    pub fn set(&mut self, key: &str, value: Value) {
        let mut segments = key.split('.').peekable();
        let mut current = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_owned(), value);
                return;
            }
            let entry = current
                .entry(segment.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry.as_object_mut().expect("just ensured object");
        }
    }
}

/// Recursively inserts entries from `incoming` that are absent in `target`.
/// Objects merge per key; present scalars are left alone.
fn merge_missing(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            None => {
                target.insert(key, value);
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(incoming_obj) = value {
                    merge_missing(existing, incoming_obj);
                }
            }
            Some(_) => {} // existing entry wins
        }
    }
}
