use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::SourceDocument;

use super::tika_command::TikaCommand;

pub struct TikaExtractor {
    java_path: String,
    tika_path: String,
    timeout: Duration,
    clear_dyld_library_path: bool,
}

impl TikaExtractor {
    pub fn new(
        java_path: &str,
        tika_path: &str,
        timeout: Duration,
        clear_dyld_library_path: bool,
    ) -> Self {
        Self {
            java_path: java_path.to_string(),
            tika_path: tika_path.to_string(),
            timeout,
            clear_dyld_library_path,
        }
    }
}

#[async_trait]
impl TextExtractor for TikaExtractor {
    #[tracing::instrument(
        skip(self),
        fields(
            filename = %document.filename(),
            media_type = %document.media_type,
        )
    )]
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<String, TextExtractorError> {
        let command = TikaCommand::extract(
            &self.java_path,
            &self.tika_path,
            document,
            self.clear_dyld_library_path,
        );
        tracing::debug!(command = %command.to_shell_line(), "Invoking Tika");

        let output = tokio::time::timeout(self.timeout, command.into_tokio().output())
            .await
            .map_err(|_| TextExtractorError::TimedOut(self.timeout))?
            .map_err(|e| {
                TextExtractorError::ExtractionFailed(format!(
                    "failed to spawn {}: {e}",
                    self.java_path
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TextExtractorError::ExtractionFailed(format!(
                "tika exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // Stdout is the extracted text, returned verbatim with trailing
        // whitespace intact.
        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        if text.trim().is_empty() {
            return Err(TextExtractorError::NoTextFound(
                document.filename().to_string(),
            ));
        }

        tracing::info!(bytes = text.len(), "Tika text extraction complete");

        Ok(text)
    }
}
