use std::path::PathBuf;

use super::media_type::MediaType;

/// A document queued for text extraction. `path` is the real filesystem
/// location, already resolved from the host's storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub media_type: MediaType,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, media_type: MediaType) -> Self {
        Self {
            path: path.into(),
            media_type,
        }
    }

    pub fn filename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }
}
