//! 実行時パス（FOLIO_HOME / XDG 解決結果）
//!
//! EnvResolver::resolve_home_dir() の結果から設定・ストレージ・ログのパスを計算する。

use super::HomeDir;
use std::path::PathBuf;

const CONFIG_FILENAME: &str = "config.json";
const STORAGE_FILENAME: &str = "storage.json";
const LOG_FILENAME: &str = "folio.jsonl";

/// ホーム配下のファイル配置
#[derive(Debug, Clone)]
pub struct Dirs {
    pub home: HomeDir,
}

impl Dirs {
    pub fn new(home: HomeDir) -> Self {
        Self { home }
    }

    /// config.json のパス
    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILENAME)
    }

    /// ローカル永続ストレージ（ブラウザの localStorage 相当）のデフォルトパス
    pub fn storage_file(&self) -> PathBuf {
        self.home.join(STORAGE_FILENAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.home.join("logs")
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}
