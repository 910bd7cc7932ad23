//! REST リソースの JsonResource 実装と、それを Entry 型で包んだ RemoteStore 実装
//!
//! 資格情報（Bearer）の付与規則:
//! - 公開リソース（projects / services）の読み取りには付けない
//! - contacts / users の読み取りと、すべての変更系には付ける（users の作成＝サインアップは除く）

use super::api_client::interpret;
use super::records::{backend_id, decode_entries, decode_entry, to_remote_payload};
use crate::domain::{Collection, Entry, Origin, RemoteError, Resource};
use crate::ports::outbound::{HttpTransport, JsonResource, Method, RemoteStore, SessionStore};
use common::domain::EntryId;
use serde_json::Value;
use std::sync::Arc;

pub struct HttpResource {
    resource: Resource,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
}

impl HttpResource {
    pub fn new(resource: Resource, transport: Arc<dyn HttpTransport>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            resource,
            transport,
            session,
        }
    }

    fn read_token(&self) -> Option<String> {
        if self.resource.protected_reads() {
            self.session.token()
        } else {
            None
        }
    }

    fn write_token(&self) -> Option<String> {
        self.session.token()
    }

    fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        token: Option<String>,
    ) -> Result<Option<Value>, RemoteError> {
        let raw = self.transport.send(method, endpoint, body, token.as_deref())?;
        interpret(raw)
    }
}

impl JsonResource for HttpResource {
    fn list(&self) -> Result<Option<Value>, RemoteError> {
        self.call(Method::Get, self.resource.endpoint(), None, self.read_token())
    }

    fn get(&self, id: &str) -> Result<Option<Value>, RemoteError> {
        self.call(Method::Get, &self.resource.item_endpoint(id), None, self.read_token())
    }

    fn create(&self, body: &Value) -> Result<Option<Value>, RemoteError> {
        let token = if self.resource.open_create() {
            None
        } else {
            self.write_token()
        };
        self.call(Method::Post, self.resource.endpoint(), Some(body), token)
    }

    fn update(&self, id: &str, body: &Value) -> Result<Option<Value>, RemoteError> {
        self.call(Method::Put, &self.resource.item_endpoint(id), Some(body), self.write_token())
    }

    fn delete(&self, id: &str) -> Result<Option<Value>, RemoteError> {
        self.call(Method::Delete, &self.resource.item_endpoint(id), None, self.write_token())
    }

    fn delete_all(&self) -> Result<Option<Value>, RemoteError> {
        self.call(Method::Delete, self.resource.endpoint(), None, self.write_token())
    }
}

/// projects / services を Entry で扱う RemoteStore
pub struct HttpRemoteStore {
    collection: Collection,
    resource: Arc<dyn JsonResource>,
}

impl HttpRemoteStore {
    pub fn new(collection: Collection, resource: Arc<dyn JsonResource>) -> Self {
        Self { collection, resource }
    }

    /// 応答本文を Entry にする。バックエンド id が無い応答は None（呼び出し側はローカル id を使う）
    fn decode_created(&self, value: Option<Value>) -> Result<Option<Entry>, RemoteError> {
        let Some(value) = value else { return Ok(None) };
        let Some(id) = backend_id(&value) else { return Ok(None) };
        let mut entry = decode_entry(self.collection, value, Origin::Remote)
            .map_err(|e| RemoteError::Parse(e.to_string()))?;
        entry.id = id;
        Ok(Some(entry))
    }
}

impl RemoteStore for HttpRemoteStore {
    fn collection(&self) -> Collection {
        self.collection
    }

    fn get_all(&self) -> Result<Vec<Entry>, RemoteError> {
        match self.resource.list()? {
            None => Ok(Vec::new()),
            Some(v) => decode_entries(self.collection, v, Origin::Remote)
                .map_err(|e| RemoteError::Parse(e.to_string())),
        }
    }

    fn create(&self, entry: &Entry) -> Result<Option<Entry>, RemoteError> {
        let created = self.resource.create(&to_remote_payload(entry))?;
        self.decode_created(created)
    }

    fn update(&self, id: &EntryId, entry: &Entry) -> Result<Option<Entry>, RemoteError> {
        let updated = self.resource.update(id.as_str(), &to_remote_payload(entry))?;
        self.decode_created(updated)
    }

    fn delete(&self, id: &EntryId) -> Result<(), RemoteError> {
        self.resource.delete(id.as_str()).map(|_| ())
    }
}
