//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    LocalizerSettings,
};
use crate::table::{
    TableError,
    TranslationTable,
};

/// Settings file name looked up in the project root
pub const SETTINGS_FILE_NAME: &str = ".localizer.json";

/// プロジェクトルートから設定を読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_root(root: &Path) -> Result<Option<LocalizerSettings>, ConfigError> {
    let config_path = root.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: LocalizerSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

impl LocalizerSettings {
    /// Reads `<root>/.localizer.json` (defaults when absent) and validates it.
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let settings = load_from_root(root)?.unwrap_or_default();
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings loaded successfully: {:?}", settings);
        Ok(settings)
    }

    /// Loads a locale directory, joining nested keys with `keySeparator`.
    pub fn load_translations(&self, dir: &Path) -> Result<TranslationTable, TableError> {
        TranslationTable::load_dir(dir, &self.key_separator)
    }
}
