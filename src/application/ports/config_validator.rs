use std::fmt;

use async_trait::async_trait;

#[async_trait]
pub trait ConfigValidator: Send + Sync {
    /// Structural check run before every extraction: both paths set, the
    /// tool archive present on disk. Spawns nothing.
    async fn require_configured(&self) -> Result<(), ConfigValidationError>;

    /// Full self-check probes, run when an administrator submits new paths.
    async fn validate(&self) -> Result<(), ConfigValidationError>;
}

/// Configuration fields exposed on the host's text-extractor settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    JavaPath,
    TikaPath,
}

impl ConfigField {
    /// Nested form-element path the host uses to attach an error to a field.
    pub fn path(&self) -> [&'static str; 2] {
        match self {
            ConfigField::JavaPath => ["text_extractor_config", "java_path"],
            ConfigField::TikaPath => ["text_extractor_config", "tika_path"],
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [section, field] = self.path();
        write!(f, "{section}.{field}")
    }
}

#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: ConfigField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ConfigField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {}", .fields.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ConfigValidationError {
    pub fields: Vec<FieldError>,
}

impl ConfigValidationError {
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self { fields }
    }
}
