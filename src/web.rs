//! Browser bindings: DOM document, `localStorage` and JS entry points
//!
//! Compiled only for `wasm32` with the `web` feature. Page scripts call
//! `installLocalizer()` once and wire `setLanguage(lang)` to their language
//! selector.

use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::document::{
    Document,
    TaggedElement,
};
use crate::localizer::Localizer;
use crate::storage::{
    LanguageStore,
    StorageError,
};
use crate::table::TranslationTable;

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    /// DOM document handle
    inner: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub const fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }

    /// The current page's document.
    #[must_use]
    pub fn current() -> Self {
        Self::new(gloo::utils::document())
    }
}

impl TaggedElement for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl Document for WebDocument {
    type Element = web_sys::Element;

    fn tagged_elements(&self, attribute: &str) -> Vec<web_sys::Element> {
        let nodes = match self.inner.query_selector_all(&format!("[{attribute}]")) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!(attribute, "Invalid attribute selector: {e:?}");
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }
}

/// `window.localStorage`, storing the language as a plain string.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// `None` when storage is disabled (e.g. some privacy modes).
    fn storage() -> Option<web_sys::Storage> {
        gloo::utils::window().local_storage().ok().flatten()
    }
}

impl LanguageStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        storage.set_item(key, value).map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Localizer used by the JS entry points.
type PageLocalizer = Localizer<BrowserStore, WebDocument>;

thread_local! {
    /// Installed page localizer
    static LOCALIZER: RefCell<Option<PageLocalizer>> = const { RefCell::new(None) };
}

/// Runs `f` against the installed localizer; a no-op before installation.
fn with_localizer(f: impl FnOnce(&mut PageLocalizer)) {
    LOCALIZER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(localizer) = slot.as_mut() {
                f(localizer);
            } else {
                tracing::debug!("Localizer not installed");
            }
        }
        Err(_) => tracing::warn!("Localizer is busy; call ignored"),
    });
}

/// Installs the bundled translations and applies the saved language once the
/// document is ready.
///
/// # Errors
/// Fails only if the bundled translations cannot be parsed.
#[wasm_bindgen(js_name = installLocalizer)]
pub fn install() -> Result<(), JsValue> {
    let table = TranslationTable::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = WebDocument::current();
    let still_loading = document.inner.ready_state() == "loading";

    LOCALIZER.with(|cell| {
        *cell.borrow_mut() = Some(Localizer::new(table, BrowserStore, document.clone()));
    });

    if still_loading {
        EventListener::once(&document.inner, "DOMContentLoaded", |_| {
            with_localizer(|localizer| {
                localizer.start();
            });
        })
        .forget();
    } else {
        with_localizer(|localizer| {
            localizer.start();
        });
    }

    Ok(())
}

/// Saves `lang` as the active language and applies it.
#[wasm_bindgen(js_name = setLanguage)]
pub fn set_language(lang: &str) {
    with_localizer(|localizer| {
        localizer.set_language(lang);
    });
}

/// Applies `lang` without saving it.
#[wasm_bindgen(js_name = applyLanguage)]
pub fn apply_language(lang: &str) {
    with_localizer(|localizer| {
        localizer.apply_language(lang);
    });
}
