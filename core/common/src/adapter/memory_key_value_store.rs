//! メモリ上のキー/値ストア（テスト用）

use crate::error::Error;
use crate::ports::outbound::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// BTreeMap をそのまま保持する KeyValueStore 実装
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値を入れた状態で作る
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, Error> {
        self.items
            .lock()
            .map_err(|_| Error::system("key/value store lock poisoned"))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic() {
        let s = MemoryKeyValueStore::with_items([("authToken", "t1")]);
        assert_eq!(s.get_item("authToken").unwrap().as_deref(), Some("t1"));
        s.set_item("authToken", "t2").unwrap();
        assert_eq!(s.get_item("authToken").unwrap().as_deref(), Some("t2"));
        s.remove_item("authToken").unwrap();
        assert_eq!(s.get_item("authToken").unwrap(), None);
    }
}
