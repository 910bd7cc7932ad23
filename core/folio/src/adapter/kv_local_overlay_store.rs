//! KeyValueStore 上の LocalOverlayStore 実装
//!
//! 1 コレクション = 1 キー（`userProjects` / `userServices`）。値は Entry の JSON 配列を文字列化したもの。
//! 読めない・壊れている値は空として扱い、warn ログを残す（次の保存で上書きされる）。

use super::records::{decode_entries, encode_local};
use crate::domain::{Collection, Entry, Origin};
use crate::ports::outbound::{KeyValueStore, LocalOverlayStore, Log, LogLevel, LogRecord};
use common::error::Error;
use serde_json::Value;
use std::sync::Arc;

pub struct KvLocalOverlayStore {
    collection: Collection,
    kv: Arc<dyn KeyValueStore>,
    log: Arc<dyn Log>,
}

impl KvLocalOverlayStore {
    pub fn new(collection: Collection, kv: Arc<dyn KeyValueStore>, log: Arc<dyn Log>) -> Self {
        Self { collection, kv, log }
    }

    fn warn(&self, message: &str, detail: String) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, "adapter", "storage", message)
                .field("key", self.collection.storage_key())
                .field("detail", detail),
        );
    }

    fn read(&self) -> Result<Vec<Entry>, String> {
        let raw = match self.kv.get_item(self.collection.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(e.to_string()),
        };
        let value: Value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
        decode_entries(self.collection, value, Origin::Local).map_err(|e| e.to_string())
    }
}

impl LocalOverlayStore for KvLocalOverlayStore {
    fn collection(&self) -> Collection {
        self.collection
    }

    fn load(&self) -> Vec<Entry> {
        match self.read() {
            Ok(entries) => entries,
            Err(detail) => {
                self.warn("ignoring unreadable local entries", detail);
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<(), Error> {
        let values = entries
            .iter()
            .map(encode_local)
            .collect::<Result<Vec<_>, _>>()?;
        let json = serde_json::to_string(&values)?;
        self.kv.set_item(self.collection.storage_key(), &json)
    }

    fn clear(&self) -> Result<(), Error> {
        self.kv.remove_item(self.collection.storage_key())
    }
}
