//! Localizer configuration
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::SETTINGS_FILE_NAME;
pub use types::{
    ConfigError,
    LocalizerSettings,
    ValidationError,
};
