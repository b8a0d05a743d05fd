//! Media references produced by a successful generation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque reference to generated media.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum MediaPayload {
    /// Path on the filesystem the remote shares with us (or its own cache path)
    Path(PathBuf),
    /// URL to fetch the content from
    Url(String),
    /// Raw binary data
    Bytes {
        /// MIME type of the content
        mime: Option<String>,
        /// Binary content
        data: Vec<u8>,
    },
}

impl MediaPayload {
    /// Interprets a textual reference as a URL or a path.
    pub fn from_reference(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            MediaPayload::Url(reference.to_string())
        } else {
            MediaPayload::Path(PathBuf::from(reference))
        }
    }
}

impl std::fmt::Display for MediaPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaPayload::Path(path) => write!(f, "{}", path.display()),
            MediaPayload::Url(url) => write!(f, "{}", url),
            MediaPayload::Bytes { mime, data } => write!(
                f,
                "<{} bytes of {}>",
                data.len(),
                mime.as_deref().unwrap_or("unknown media")
            ),
        }
    }
}
