//! Translation table data model

use std::collections::{
    BTreeSet,
    HashMap,
};

use thiserror::Error;

/// Errors raised while building a [`TranslationTable`] from external data.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read translation file {path}: {source}")]
    Io {
        /// Offending file or directory
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translations: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid translation data at '{path}': {message}")]
    InvalidShape {
        /// Location of the bad value (language code or `$` for the root)
        path: String,
        message: String,
    },
}

impl TableError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn invalid_shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidShape { path: path.into(), message: message.into() }
    }
}

/// Key → display string translations for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMap {
    /// Flat key map (nested sources are already joined with the key separator)
    entries: HashMap<String, String>,
}

impl LocaleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translation for `key`, if this locale defines one.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for LocaleMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Language code → [`LocaleMap`].
///
/// Built once and never mutated afterwards; lookups on an unknown language or
/// key simply return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Locales by language code (e.g. "en", "ta", "hin")
    locales: HashMap<String, LocaleMap>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the locale for `language`.
    #[must_use]
    pub fn with_locale(mut self, language: impl Into<String>, locale: LocaleMap) -> Self {
        self.locales.insert(language.into(), locale);
        self
    }

    #[must_use]
    pub fn locale(&self, language: &str) -> Option<&LocaleMap> {
        self.locales.get(language)
    }

    /// `table[language][key]`, or `None` when either is absent.
    #[must_use]
    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.locales.get(language)?.get(key)
    }

    #[must_use]
    pub fn contains_language(&self, language: &str) -> bool {
        self.locales.contains_key(language)
    }

    /// Language codes in sorted order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Keys defined by at least one other locale but missing from `language`.
    ///
    /// An unknown language reports every key in the table.
    #[must_use]
    pub fn missing_keys(&self, language: &str) -> Vec<String> {
        let all_keys: BTreeSet<&str> = self.locales.values().flat_map(LocaleMap::keys).collect();
        let locale = self.locales.get(language);

        all_keys
            .into_iter()
            .filter(|key| !locale.is_some_and(|l| l.contains_key(key)))
            .map(ToString::to_string)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
