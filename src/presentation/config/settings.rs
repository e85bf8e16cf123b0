use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tika: TikaSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Paths and limits for the external Tika invocation. Typical values are
/// `java` for the executable and `/var/apache-tika/tika-app-1.8.jar` for
/// the application jar.
#[derive(Debug, Clone, Deserialize)]
pub struct TikaSettings {
    pub java_path: String,
    pub tika_path: String,
    #[serde(default = "default_extraction_timeout_secs")]
    pub extraction_timeout_secs: u64,
    #[serde(default)]
    pub clear_dyld_library_path: bool,
}

impl TikaSettings {
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }
}

fn default_extraction_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

/// Deployment environment; selects which appsettings file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Environment-variable override source: `APP_` prefix, `__` between
/// nested keys, so `APP_TIKA__JAVA_PATH` maps to `tika.java_path`.
pub fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

/// Layered settings: the optional appsettings file for the current
/// environment, overridden by APP-prefixed environment variables
/// (e.g. `APP_TIKA__JAVA_PATH`).
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let configuration = config::Config::builder()
        .add_source(
            config::File::with_name(&format!("appsettings.{}", environment.as_str()))
                .required(false),
        )
        .add_source(env_overrides())
        .build()?;

    configuration.try_deserialize()
}
