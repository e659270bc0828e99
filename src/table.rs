//! Translation tables
/// Bundled locales
mod builtin;
/// JSON loading
mod loader;
/// Table data model
mod types;

pub use loader::{
    flatten_json,
    load_translation_file,
    locale_from_json,
};
pub use types::{
    LocaleMap,
    TableError,
    TranslationTable,
};
