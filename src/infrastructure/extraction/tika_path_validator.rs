use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    ConfigField, ConfigValidationError, ConfigValidator, FieldError, Messenger,
};

use super::tika_command::TikaCommand;

pub const SELF_CHECK_TIMEOUT: Duration = Duration::from_secs(15);

/// Exit codes the configuration probes must observe. A bare java
/// invocation prints usage and exits 1; any other code, 0 included, fails
/// the runtime check. `tika-app.jar -V` exits 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfCheck {
    Runtime,
    ToolArchive,
}

impl SelfCheck {
    pub fn expected_exit_code(self) -> i32 {
        match self {
            SelfCheck::Runtime => 1,
            SelfCheck::ToolArchive => 0,
        }
    }
}

enum ProbeFailure {
    TimedOut,
    Unexpected,
}

pub struct TikaPathValidator {
    java_path: String,
    tika_path: String,
    clear_dyld_library_path: bool,
    probe_timeout: Duration,
    messenger: Arc<dyn Messenger>,
}

impl TikaPathValidator {
    pub fn new(
        java_path: &str,
        tika_path: &str,
        clear_dyld_library_path: bool,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            java_path: java_path.to_string(),
            tika_path: tika_path.to_string(),
            clear_dyld_library_path,
            probe_timeout: SELF_CHECK_TIMEOUT,
            messenger,
        }
    }

    /// Overrides the per-probe ceiling, `SELF_CHECK_TIMEOUT` by default.
    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    async fn probe(&self, command: TikaCommand, check: SelfCheck) -> Result<(), ProbeFailure> {
        tracing::debug!(command = %command.to_shell_line(), "Running configuration probe");

        let spawned = tokio::time::timeout(self.probe_timeout, command.into_tokio().output())
            .await
            .map_err(|_| ProbeFailure::TimedOut)?;

        let output = match spawned {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(error = %e, "Probe failed to spawn");
                return Err(ProbeFailure::Unexpected);
            }
        };

        match output.status.code() {
            Some(code) if code == check.expected_exit_code() => Ok(()),
            other => {
                tracing::debug!(
                    exit_code = ?other,
                    expected = check.expected_exit_code(),
                    "Probe exit code mismatch"
                );
                Err(ProbeFailure::Unexpected)
            }
        }
    }

    async fn check_java(&self) -> Result<(), FieldError> {
        if self.java_path.trim().is_empty() {
            return Err(FieldError::new(
                ConfigField::JavaPath,
                "You must set a valid path to be able to check the Tika application jar.",
            ));
        }

        let command =
            TikaCommand::runtime_self_check(&self.java_path, self.clear_dyld_library_path);

        match self.probe(command, SelfCheck::Runtime).await {
            Ok(()) => Ok(()),
            Err(ProbeFailure::TimedOut) => Err(FieldError::new(
                ConfigField::JavaPath,
                format!(
                    "The java executable {} did not respond within {}s.",
                    self.java_path,
                    self.probe_timeout.as_secs()
                ),
            )),
            Err(ProbeFailure::Unexpected) => Err(FieldError::new(
                ConfigField::JavaPath,
                format!(
                    "Invalid path or filename {} for the java executable.",
                    self.java_path
                ),
            )),
        }
    }

    async fn check_tika(&self, java_ok: bool) -> Result<(), FieldError> {
        let exists = tokio::fs::try_exists(&self.tika_path).await.unwrap_or(false);
        if !exists {
            // Covers the empty path too; the runtime is never invoked here.
            return Err(FieldError::new(
                ConfigField::TikaPath,
                format!(
                    "Invalid path or filename {} for the Tika application jar.",
                    self.tika_path
                ),
            ));
        }

        // The -V probe runs through the java executable; skipped when the
        // runtime check already failed.
        if !java_ok {
            return Ok(());
        }

        let command = TikaCommand::version_probe(
            &self.java_path,
            &self.tika_path,
            self.clear_dyld_library_path,
        );

        match self.probe(command, SelfCheck::ToolArchive).await {
            Ok(()) => {
                self.messenger.notify("Tika can be reached and be executed");
                Ok(())
            }
            Err(ProbeFailure::TimedOut) => Err(FieldError::new(
                ConfigField::TikaPath,
                format!(
                    "Tika did not respond within {}s.",
                    self.probe_timeout.as_secs()
                ),
            )),
            Err(ProbeFailure::Unexpected) => Err(FieldError::new(
                ConfigField::TikaPath,
                "Tika could not be reached and executed.",
            )),
        }
    }
}

#[async_trait]
impl ConfigValidator for TikaPathValidator {
    async fn require_configured(&self) -> Result<(), ConfigValidationError> {
        let mut fields = Vec::new();

        if self.java_path.trim().is_empty() {
            fields.push(FieldError::new(
                ConfigField::JavaPath,
                "You must set a valid path to the java executable.",
            ));
        }

        if self.tika_path.trim().is_empty() {
            fields.push(FieldError::new(
                ConfigField::TikaPath,
                "You must set a valid path to the Tika application jar.",
            ));
        } else if !tokio::fs::try_exists(&self.tika_path).await.unwrap_or(false) {
            fields.push(FieldError::new(
                ConfigField::TikaPath,
                format!(
                    "Invalid path or filename {} for the Tika application jar.",
                    self.tika_path
                ),
            ));
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ConfigValidationError::new(fields))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn validate(&self) -> Result<(), ConfigValidationError> {
        let mut fields = Vec::new();

        let java_ok = match self.check_java().await {
            Ok(()) => true,
            Err(field) => {
                fields.push(field);
                false
            }
        };

        if let Err(field) = self.check_tika(java_ok).await {
            fields.push(field);
        }

        if fields.is_empty() {
            tracing::info!("Tika configuration probes passed");
            Ok(())
        } else {
            tracing::warn!(field_count = fields.len(), "Tika configuration probes failed");
            Err(ConfigValidationError::new(fields))
        }
    }
}
