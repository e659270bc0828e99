//! Applies translations to tagged document elements and remembers the
//! user's language choice.

use crate::config::LocalizerSettings;
use crate::document::{
    Document,
    TaggedElement,
};
use crate::storage::LanguageStore;
use crate::table::TranslationTable;

/// What the document currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocalizerState {
    /// Original document text, nothing applied yet
    #[default]
    Unapplied,
    /// Text rewritten for this language (the last one applied)
    Applied(String),
}

/// Result of one [`Localizer::apply_language`] pass.
///
/// Purely informational; missing translations never become errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplySummary {
    /// Elements whose text was replaced
    pub updated: usize,
    /// Tagged elements left as-is because the language or key is absent
    pub missing: usize,
}

/// Owns the translation table plus the injected storage and document.
#[derive(Debug)]
pub struct Localizer<S, D> {
    /// Immutable translations
    table: TranslationTable,
    /// Attribute, storage key and default language
    settings: LocalizerSettings,
    /// Persisted active language
    store: S,
    /// Page being localized
    document: D,
    /// Last applied language
    state: LocalizerState,
}

impl<S, D> Localizer<S, D>
where
    S: LanguageStore,
    D: Document,
{
    /// Creates a localizer with default settings (`data-key`, `language`, `en`).
    #[must_use]
    pub fn new(table: TranslationTable, store: S, document: D) -> Self {
        Self::with_settings(table, LocalizerSettings::default(), store, document)
    }

    #[must_use]
    pub fn with_settings(
        table: TranslationTable,
        settings: LocalizerSettings,
        store: S,
        document: D,
    ) -> Self {
        Self { table, settings, store, document, state: LocalizerState::Unapplied }
    }

    /// Document-ready step: applies the persisted language, or the default.
    ///
    /// Returns the language that was applied.
    pub fn start(&mut self) -> String {
        let language = self.active_language();
        tracing::debug!(language = %language, "Applying saved language on startup");
        self.apply_language(&language);
        language
    }

    /// Persists `language` and applies it immediately.
    ///
    /// The code is not checked against the table; an unknown one changes no
    /// text. A failed write is logged and the language is still applied.
    pub fn set_language(&mut self, language: &str) -> ApplySummary {
        if let Err(e) = self.store.save(&self.settings.storage_key, language) {
            tracing::warn!(
                key = %self.settings.storage_key,
                language,
                "Failed to persist language: {e}"
            );
        }
        self.apply_language(language)
    }

    /// Rewrites every tagged element that has a translation in `language`.
    ///
    /// Elements whose key (or whose whole language) is absent keep their text.
    /// An empty translation counts as absent.
    pub fn apply_language(&mut self, language: &str) -> ApplySummary {
        let locale = self.table.locale(language);
        if locale.is_none() {
            self.report_missing(format_args!("Unknown language '{language}'"));
        }

        let mut summary = ApplySummary::default();
        for element in self.document.tagged_elements(&self.settings.key_attribute) {
            let Some(key) = element.attribute(&self.settings.key_attribute) else {
                continue;
            };

            match locale.and_then(|l| l.get(&key)).filter(|text| !text.is_empty()) {
                Some(text) => {
                    element.set_text(text);
                    summary.updated += 1;
                }
                None => {
                    if locale.is_some() {
                        self.report_missing(format_args!(
                            "No '{language}' translation for key '{key}'"
                        ));
                    }
                    summary.missing += 1;
                }
            }
        }

        tracing::debug!(
            language,
            updated = summary.updated,
            missing = summary.missing,
            "Applied language"
        );
        self.state = LocalizerState::Applied(language.to_string());
        summary
    }

    /// Persisted language, or the configured default when none (or an empty
    /// string) is stored.
    #[must_use]
    pub fn active_language(&self) -> String {
        self.store
            .load(&self.settings.storage_key)
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| self.settings.default_language.clone())
    }

    #[must_use]
    pub const fn state(&self) -> &LocalizerState {
        &self.state
    }

    #[must_use]
    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    #[must_use]
    pub const fn settings(&self) -> &LocalizerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Gives back the injected parts.
    #[must_use]
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    fn report_missing(&self, message: std::fmt::Arguments<'_>) {
        if self.settings.warn_on_missing {
            tracing::warn!("{message}");
        } else {
            tracing::debug!("{message}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::document::{
        MemoryDocument,
        MemoryElement,
    };
    use crate::storage::{
        MemoryStore,
        StorageError,
    };
    use crate::test_utils::{
        create_document,
        home_table,
    };

    fn create_localizer(
        store: MemoryStore,
        keys: &[(&str, &str)],
    ) -> Localizer<MemoryStore, MemoryDocument> {
        Localizer::new(home_table(), store, create_document(keys))
    }

    #[googletest::test]
    fn test_apply_language_replaces_text() {
        let mut localizer = create_localizer(MemoryStore::new(), &[("home", "Home")]);

        let summary = localizer.apply_language("ta");

        assert_eq!(localizer.document().texts(), vec!["முகப்பு".to_string()]);
        expect_that!(summary, eq(ApplySummary { updated: 1, missing: 0 }));
        expect_that!(localizer.state(), eq(&LocalizerState::Applied("ta".to_string())));
    }

    #[googletest::test]
    fn test_set_language_persists_and_applies() {
        let mut localizer = create_localizer(MemoryStore::new(), &[("home", "Home")]);

        localizer.apply_language("ta");
        localizer.set_language("en");

        assert_eq!(localizer.document().texts(), vec!["Home".to_string()]);
        expect_that!(localizer.store().load("language"), some(eq("en")));
        expect_that!(localizer.active_language(), eq("en"));
    }

    #[rstest]
    #[case("en")]
    #[case("ta")]
    #[case("xx")]
    fn test_apply_language_is_idempotent(#[case] language: &str) {
        let keys = [("home", "Home"), ("logout", "Logout"), ("orphan", "Orphan")];
        let mut once = create_localizer(MemoryStore::new(), &keys);
        let mut twice = create_localizer(MemoryStore::new(), &keys);

        let first = once.apply_language(language);
        twice.apply_language(language);
        let second = twice.apply_language(language);

        assert_eq!(once.document().texts(), twice.document().texts());
        assert_eq!(first, second);
    }

    #[googletest::test]
    fn test_missing_key_keeps_text() {
        let mut localizer =
            create_localizer(MemoryStore::new(), &[("home", "Home"), ("logout", "Logout")]);

        let summary = localizer.apply_language("ta");

        assert_eq!(localizer.document().texts(), vec!["முகப்பு".to_string(), "Logout".to_string()]);
        expect_that!(summary, eq(ApplySummary { updated: 1, missing: 1 }));
    }

    #[googletest::test]
    fn test_unknown_language_changes_nothing() {
        let mut localizer =
            create_localizer(MemoryStore::new(), &[("home", "Start"), ("logout", "Exit")]);

        let summary = localizer.apply_language("xx");

        assert_eq!(localizer.document().texts(), vec!["Start".to_string(), "Exit".to_string()]);
        expect_that!(summary, eq(ApplySummary { updated: 0, missing: 2 }));
    }

    #[googletest::test]
    fn test_set_unknown_language_still_persists() {
        let mut localizer = create_localizer(MemoryStore::new(), &[("home", "Home")]);

        localizer.set_language("xx");

        assert_eq!(localizer.document().texts(), vec!["Home".to_string()]);
        expect_that!(localizer.active_language(), eq("xx"));
    }

    #[googletest::test]
    fn test_start_defaults_to_english() {
        let mut localizer = create_localizer(MemoryStore::new(), &[("home", "placeholder")]);

        let applied = localizer.start();

        expect_that!(applied, eq("en"));
        assert_eq!(localizer.document().texts(), vec!["Home".to_string()]);
        expect_that!(localizer.store().load("language"), none());
    }

    #[googletest::test]
    fn test_start_empty_persisted_value_uses_default() {
        let store = MemoryStore::with_value("language", "");
        let mut localizer = create_localizer(store, &[("home", "placeholder")]);

        let applied = localizer.start();

        expect_that!(applied, eq("en"));
        assert_eq!(localizer.document().texts(), vec!["Home".to_string()]);
    }

    #[googletest::test]
    fn test_empty_translation_keeps_text() {
        let table = TranslationTable::new()
            .with_locale("en", [("home", ""), ("logout", "Logout")].into_iter().collect());
        let mut localizer = Localizer::new(
            table,
            MemoryStore::new(),
            create_document(&[("home", "Home"), ("logout", "Exit")]),
        );

        let summary = localizer.apply_language("en");

        assert_eq!(localizer.document().texts(), vec!["Home".to_string(), "Logout".to_string()]);
        expect_that!(summary, eq(ApplySummary { updated: 1, missing: 1 }));
    }

    #[googletest::test]
    fn test_start_uses_persisted_language() {
        let store = MemoryStore::with_value("language", "ta");
        let mut localizer = create_localizer(store, &[("home", "Home")]);

        expect_that!(localizer.state(), eq(&LocalizerState::Unapplied));
        let applied = localizer.start();

        expect_that!(applied, eq("ta"));
        assert_eq!(localizer.document().texts(), vec!["முகப்பு".to_string()]);
    }

    #[googletest::test]
    fn test_set_language_survives_reload() {
        let mut localizer = create_localizer(MemoryStore::new(), &[("home", "Home")]);
        localizer.set_language("ta");
        let (store, _) = localizer.into_parts();

        let mut reloaded = create_localizer(store, &[("home", "Home")]);
        reloaded.start();

        assert_eq!(reloaded.document().texts(), vec!["முகப்பு".to_string()]);
    }

    #[googletest::test]
    fn test_custom_settings() {
        let settings = LocalizerSettings {
            key_attribute: "data-i18n".to_string(),
            storage_key: "ui.lang".to_string(),
            default_language: "ta".to_string(),
            ..LocalizerSettings::default()
        };
        let mut document = MemoryDocument::new();
        let tagged = document.push(MemoryElement::new("Home").with_attribute("data-i18n", "home"));
        let untagged = document.push(MemoryElement::new("Home").with_attribute("data-key", "home"));
        let mut localizer =
            Localizer::with_settings(home_table(), settings, MemoryStore::new(), document);

        localizer.start();
        localizer.set_language("ta");

        expect_that!(tagged.text(), eq("முகப்பு"));
        expect_that!(untagged.text(), eq("Home"));
        expect_that!(localizer.store().load("ui.lang"), some(eq("ta")));
        expect_that!(localizer.store().load("language"), none());
    }

    /// Store whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl LanguageStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&mut self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    #[googletest::test]
    fn test_failed_persist_still_applies() {
        let mut localizer =
            Localizer::new(home_table(), ReadOnlyStore, create_document(&[("home", "Home")]));

        let summary = localizer.set_language("ta");

        expect_that!(summary.updated, eq(1));
        assert_eq!(localizer.document().texts(), vec!["முகப்பு".to_string()]);
        expect_that!(localizer.active_language(), eq("en"));
    }
}
