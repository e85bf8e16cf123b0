use std::fmt;

/// Declared MIME type of a source document, as reported by the host.
///
/// Kept as an open string rather than a closed enum: the extraction tool,
/// not this crate, decides what it can parse, so unknown types are data
/// rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    pub fn new(mime: impl Into<String>) -> Self {
        Self(mime.into().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MP3 audio is invoked without the encoding/classpath arguments; see
    /// `TikaCommand::extract`.
    pub fn is_mpeg_audio(&self) -> bool {
        self.0 == "audio/mpeg"
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
