use std::sync::Arc;

use crate::application::ports::{
    ConfigValidationError, ConfigValidator, TextExtractor, TextExtractorError,
};
use crate::domain::SourceDocument;

/// Orchestrates one extraction: configuration is re-checked on every call,
/// never cached, because the host can change the paths between calls.
pub struct ExtractionService<E, V>
where
    E: TextExtractor,
    V: ConfigValidator,
{
    extractor: Arc<E>,
    validator: Arc<V>,
}

impl<E, V> ExtractionService<E, V>
where
    E: TextExtractor,
    V: ConfigValidator,
{
    pub fn new(extractor: Arc<E>, validator: Arc<V>) -> Self {
        Self {
            extractor,
            validator,
        }
    }

    pub async fn extract(&self, document: &SourceDocument) -> Result<String, ExtractionError> {
        self.validator
            .require_configured()
            .await
            .map_err(ExtractionError::Configuration)?;

        let text = self
            .extractor
            .extract_text(document)
            .await
            .map_err(ExtractionError::Extraction)?;

        tracing::debug!(
            filename = %document.filename(),
            bytes = text.len(),
            "Extraction finished"
        );

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("configuration: {0}")]
    Configuration(#[from] ConfigValidationError),
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
}
