mod document;
mod media_type;

pub use document::SourceDocument;
pub use media_type::MediaType;
