mod settings;

pub use settings::{
    env_overrides, load_settings, Environment, LoggingSettings, Settings, TikaSettings,
};
