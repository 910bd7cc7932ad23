//! JSON ファイル 1 つをキー/値ストアとして使う実装（ブラウザの localStorage 相当）
//!
//! ファイル形式: `{ "<key>": "<string value>", ... }`。
//! get / set / remove のたびにファイル全体を読み直し、書き込みは一時ファイル経由で置き換える。
//! ファイル自体が壊れている場合は空として読み、warn ログを残す。
//! 壊れたファイルは書き込み前に `<name>.corrupt` へ退避してから作り直す。

use crate::adapter::NoopLog;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 読み込んだファイルの中身
enum Snapshot {
    Map(BTreeMap<String, String>),
    /// JSON として読めなかった（理由）
    Corrupt(String),
}

/// ファイルに永続化するキー/値ストア
pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    log: Arc<dyn Log>,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
            log: Arc::new(NoopLog),
        }
    }

    /// 壊れたファイルを検出したときの warn の出力先
    pub fn with_log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = log;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 壊れたファイルの退避先
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn warn(&self, message: &str, detail: String) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, "adapter", "storage", message)
                .field("path", self.path.display().to_string())
                .field("detail", detail),
        );
    }

    fn read(&self) -> Result<Snapshot, Error> {
        let meta = match self.fs.metadata(&self.path) {
            Ok(meta) => meta,
            Err(_) => return Ok(Snapshot::Map(BTreeMap::new())),
        };
        if !meta.is_file() {
            return Err(Error::io_msg(format!(
                "Storage path '{}' is not a regular file",
                self.path.display()
            )));
        }
        if meta.is_empty() {
            return Ok(Snapshot::Map(BTreeMap::new()));
        }
        let s = self.fs.read_to_string(&self.path)?;
        if s.trim().is_empty() {
            return Ok(Snapshot::Map(BTreeMap::new()));
        }
        Ok(match serde_json::from_str(&s) {
            Ok(map) => Snapshot::Map(map),
            Err(e) => Snapshot::Corrupt(e.to_string()),
        })
    }

    /// 書き込み用に読む。壊れていれば退避して空から始める
    fn read_for_write(&self) -> Result<BTreeMap<String, String>, Error> {
        match self.read()? {
            Snapshot::Map(map) => Ok(map),
            Snapshot::Corrupt(detail) => {
                let backup = self.backup_path();
                self.fs.rename(&self.path, &backup)?;
                self.warn(
                    &format!("unreadable storage file moved to {}", backup.display()),
                    detail,
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        self.fs.write(&tmp, &json)?;
        self.fs.rename(&tmp, &self.path)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        match self.read()? {
            Snapshot::Map(mut map) => Ok(map.remove(key)),
            Snapshot::Corrupt(detail) => {
                self.warn("ignoring unreadable storage file", detail);
                Ok(None)
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut map = self.read_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut map = match self.read()? {
            Snapshot::Map(map) => map,
            Snapshot::Corrupt(detail) => {
                self.warn("ignoring unreadable storage file", detail);
                return Ok(());
            }
        };
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
