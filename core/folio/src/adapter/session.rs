//! KeyValueStore 上のセッション実装（`authToken` / `authUser`）

use crate::ports::outbound::{KeyValueStore, SessionStore};
use common::error::Error;
use serde_json::Value;
use std::sync::Arc;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "authUser";

pub struct KvSession {
    kv: Arc<dyn KeyValueStore>,
}

impl KvSession {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }
}

impl SessionStore for KvSession {
    fn token(&self) -> Option<String> {
        self.kv
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn current_user(&self) -> Option<Value> {
        let raw = self.kv.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn sign_in(&self, token: &str, user: &Value) -> Result<(), Error> {
        self.kv.set_item(TOKEN_KEY, token)?;
        self.kv.set_item(USER_KEY, &serde_json::to_string(user)?)
    }

    fn sign_out(&self) -> Result<(), Error> {
        self.kv.remove_item(TOKEN_KEY)?;
        self.kv.remove_item(USER_KEY)
    }
}
