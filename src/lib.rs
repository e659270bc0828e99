//! dom-localizer
//!
//! Rewrites the text of elements tagged with a translation key and remembers
//! the user's language choice across page loads.

pub mod config;
pub mod document;
pub mod localizer;
pub mod storage;
pub mod table;
#[cfg(test)]
mod test_utils;
// wasm-bindgen exports expand to unsafe extern glue
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[allow(unsafe_code)]
pub mod web;

pub use config::LocalizerSettings;
pub use localizer::{
    ApplySummary,
    Localizer,
    LocalizerState,
};
