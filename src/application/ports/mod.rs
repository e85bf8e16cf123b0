mod config_validator;
mod messenger;
mod text_extractor;

pub use config_validator::{ConfigField, ConfigValidationError, ConfigValidator, FieldError};
pub use messenger::Messenger;
pub use text_extractor::{TextExtractor, TextExtractorError};
