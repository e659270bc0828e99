//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::document::{
    MemoryDocument,
    MemoryElement,
};
use crate::table::TranslationTable;

/// `{en: {home, logout}, ta: {home}}` のテーブルを作成する
///
/// `ta` には `logout` が無いので、欠落キーのテストにも使える。
pub(crate) fn home_table() -> TranslationTable {
    TranslationTable::new()
        .with_locale("en", [("home", "Home"), ("logout", "Logout")].into_iter().collect())
        .with_locale("ta", [("home", "முகப்பு")].into_iter().collect())
}

/// `data-key` 付きの要素を持つドキュメントを作成する
///
/// # Arguments
/// * `keys` - (翻訳キー, 初期テキスト) の一覧（文書順）
pub(crate) fn create_document(keys: &[(&str, &str)]) -> MemoryDocument {
    let mut document = MemoryDocument::new();
    for (key, text) in keys {
        document.push(MemoryElement::new(*text).with_attribute("data-key", *key));
    }
    document
}
