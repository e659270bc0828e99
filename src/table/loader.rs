//! Translation data loading (JSON values, files and locale directories)

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::{
    LocaleMap,
    TableError,
    TranslationTable,
};

/// Flatten nested JSON object into separator-joined key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use dom_localizer::table::flatten_json;
///
/// let json = json!({
///     "nav": {
///         "home": "Home",
///         "logout": "Logout"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("nav.home"), Some(&"Home".to_string()));
/// assert_eq!(flattened.get("nav.logout"), Some(&"Logout".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Builds one locale from a JSON object.
///
/// # Errors
/// `TableError::InvalidShape` when `json` is not an object.
pub fn locale_from_json(
    language: &str,
    json: &Value,
    separator: &str,
) -> Result<LocaleMap, TableError> {
    if !json.is_object() {
        return Err(TableError::invalid_shape(language, "locale must be a JSON object"));
    }
    Ok(LocaleMap::from(flatten_json(json, separator, None)))
}

impl TranslationTable {
    /// Builds a table from `{"<lang>": {<keys>}, ...}`.
    ///
    /// # Errors
    /// `TableError::InvalidShape` when the root or any locale is not an object.
    pub fn from_json(json: &Value, separator: &str) -> Result<Self, TableError> {
        let Value::Object(languages) = json else {
            return Err(TableError::invalid_shape("$", "root must map language codes to objects"));
        };

        languages.iter().try_fold(Self::new(), |table, (language, value)| {
            let locale = locale_from_json(language, value, separator)?;
            Ok(table.with_locale(language.clone(), locale))
        })
    }

    /// Parses [`Self::from_json`] input from text.
    pub fn from_json_str(text: &str, separator: &str) -> Result<Self, TableError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json, separator)
    }

    /// Loads every `*.json` file in `dir` as one locale named after the file stem.
    ///
    /// `locales/hin.json` becomes language `hin`; codes are not checked
    /// against any registry.
    pub fn load_dir(dir: &Path, separator: &str) -> Result<Self, TableError> {
        tracing::debug!(dir = %dir.display(), "Loading translation directory");

        let entries =
            std::fs::read_dir(dir).map_err(|e| TableError::io(dir.display().to_string(), e))?;

        let mut table = Self::new();
        for entry in entries {
            let path = entry.map_err(|e| TableError::io(dir.display().to_string(), e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = language_from_path(&path) else {
                tracing::debug!(path = %path.display(), "Skipping file without a usable stem");
                continue;
            };

            let locale = load_translation_file(&path, &language, separator)?;
            tracing::debug!(language = %language, keys = locale.len(), "Loaded locale");
            table = table.with_locale(language, locale);
        }

        Ok(table)
    }
}

/// Reads one locale file.
///
/// # Errors
/// Returns error if file read, JSON parse or shape check fails.
pub fn load_translation_file(
    file_path: &Path,
    language: &str,
    separator: &str,
) -> Result<LocaleMap, TableError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| TableError::io(file_path.display().to_string(), e))?;
    let json: Value = serde_json::from_str(&content)?;
    locale_from_json(language, &json, separator)
}

/// Language code of a locale file (its stem, e.g. `locales/ta.json` → `ta`).
fn language_from_path(file_path: &Path) -> Option<String> {
    let stem = file_path.file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| stem.to_string())
}
