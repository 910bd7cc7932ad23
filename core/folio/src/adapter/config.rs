//! 設定ファイル（<home>/config.json）の読み込みと解決（adapter 層）

use crate::ports::outbound::{Log, LogLevel, LogRecord};
use common::domain::dirs::Dirs;
use common::domain::BaseUrl;
use common::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// config.json の内容（全項目省略可）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub api_url: Option<String>,
    /// ローカルストレージのファイル。相対パスはホーム基準
    pub storage_file: Option<PathBuf>,
}

/// 実行時に使う確定値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_url: BaseUrl,
    pub storage_file: PathBuf,
}

/// config.json を読む。無ければ既定値、壊れていれば warn ログを残して既定値
pub fn load_config(fs: &dyn FileSystem, dirs: &Dirs, log: &dyn Log) -> FolioConfig {
    let path = dirs.config_file();
    if !fs.exists(&path) {
        return FolioConfig::default();
    }
    let parsed = fs
        .read_to_string(&path)
        .and_then(|s| serde_json::from_str::<FolioConfig>(&s).map_err(Into::into));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            let _ = log.log(
                &LogRecord::new(LogLevel::Warn, "adapter", "config", "ignoring invalid config.json")
                    .field("path", path.display().to_string())
                    .field("error", e.to_string()),
            );
            eprintln!("Warning: Failed to load {}: {}", path.display(), e);
            FolioConfig::default()
        }
    }
}

/// 優先順位: FOLIO_API_URL > config.json > 既定値
pub fn resolve_config(config: &FolioConfig, api_url_override: Option<String>, dirs: &Dirs) -> ResolvedConfig {
    let api_url = api_url_override
        .or_else(|| config.api_url.clone().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let storage_file = match &config.storage_file {
        Some(p) if p.is_absolute() => p.clone(),
        Some(p) => dirs.home.join(p),
        None => dirs.storage_file(),
    };
    ResolvedConfig {
        api_url: BaseUrl::new(api_url.trim()),
        storage_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::stubs::CollectLog;
    use common::adapter::{NoopLog, StdFileSystem};
    use common::domain::HomeDir;

    fn dirs(dir: &tempfile::TempDir) -> Dirs {
        Dirs::new(HomeDir::new(dir.path().to_path_buf()))
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let d = dirs(&dir);
        let config = load_config(&StdFileSystem, &d, &NoopLog);
        assert_eq!(config, FolioConfig::default());
        let resolved = resolve_config(&config, None, &d);
        assert_eq!(resolved.api_url.to_string(), DEFAULT_API_URL);
        assert_eq!(resolved.storage_file, dir.path().join("storage.json"));
    }

    #[test]
    fn test_config_file_and_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let d = dirs(&dir);
        std::fs::write(
            d.config_file(),
            r#"{"api_url": "https://api.example.com/", "storage_file": "data/local.json"}"#,
        )
        .unwrap();
        let config = load_config(&StdFileSystem, &d, &NoopLog);
        let resolved = resolve_config(&config, None, &d);
        assert_eq!(resolved.api_url.to_string(), "https://api.example.com");
        assert_eq!(resolved.storage_file, dir.path().join("data/local.json"));

        let resolved = resolve_config(&config, Some("http://127.0.0.1:9000".to_string()), &d);
        assert_eq!(resolved.api_url.to_string(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_corrupt_config_warns_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let d = dirs(&dir);
        std::fs::write(d.config_file(), "{ nope").unwrap();
        let log = CollectLog::default();
        assert_eq!(load_config(&StdFileSystem, &d, &log), FolioConfig::default());
        assert_eq!(log.records()[0].kind.as_deref(), Some("config"));
    }
}
