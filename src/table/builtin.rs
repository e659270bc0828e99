//! Translations bundled with the crate.

use serde_json::Value;

use super::{
    TableError,
    TranslationTable,
    locale_from_json,
};

/// Language code and raw JSON of each bundled locale.
const BUNDLED_LOCALES: [(&str, &str); 3] = [
    ("en", include_str!("../../locales/en.json")),
    ("ta", include_str!("../../locales/ta.json")),
    ("hin", include_str!("../../locales/hin.json")),
];

impl TranslationTable {
    /// The bundled English, Tamil and Hindi translations.
    ///
    /// The bundled files are flat, so the key separator is irrelevant here.
    pub fn builtin() -> Result<Self, TableError> {
        BUNDLED_LOCALES.iter().try_fold(Self::new(), |table, (language, raw)| {
            let json: Value = serde_json::from_str(raw)?;
            let locale = locale_from_json(language, &json, ".")?;
            Ok(table.with_locale(*language, locale))
        })
    }
}
