use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keyAttribute")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Localizer settings, read from `.localizer.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizerSettings {
    /// Attribute holding the translation key (`<span data-key="home">`).
    pub key_attribute: String,

    /// Storage key of the persisted active language.
    pub storage_key: String,

    /// Applied at startup when nothing is persisted.
    pub default_language: String,

    /// Joins nested keys when loading translation files.
    pub key_separator: String,

    /// Log missing translations at `warn` instead of `debug`.
    ///
    /// Either way the element keeps its current text.
    pub warn_on_missing: bool,
}

impl Default for LocalizerSettings {
    fn default() -> Self {
        Self {
            key_attribute: "data-key".to_string(),
            storage_key: "language".to_string(),
            default_language: "en".to_string(),
            key_separator: ".".to_string(),
            warn_on_missing: false,
        }
    }
}

impl LocalizerSettings {
    /// # Errors
    /// - Required field is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let required = [
            ("keyAttribute", &self.key_attribute, "Example: \"data-key\""),
            ("storageKey", &self.storage_key, "Example: \"language\""),
            ("defaultLanguage", &self.default_language, "Example: \"en\""),
            ("keySeparator", &self.key_separator, "Example: \".\" (dot)"),
        ];

        let errors: Vec<ValidationError> = required
            .into_iter()
            .filter(|(_, value, _)| value.trim().is_empty())
            .map(|(field, _, example)| {
                ValidationError::new(field, format!("The value cannot be empty. {example}"))
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
