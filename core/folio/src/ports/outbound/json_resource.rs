//! REST リソース 1 つ分の JSON 操作 Outbound ポート
//!
//! 本文が空の応答は `Ok(None)`（エラーではない）。

use crate::domain::RemoteError;
use serde_json::Value;

pub trait JsonResource: Send + Sync {
    /// GET /api/<resource>
    fn list(&self) -> Result<Option<Value>, RemoteError>;
    /// GET /api/<resource>/{id}
    fn get(&self, id: &str) -> Result<Option<Value>, RemoteError>;
    /// POST /api/<resource>
    fn create(&self, body: &Value) -> Result<Option<Value>, RemoteError>;
    /// PUT /api/<resource>/{id}
    fn update(&self, id: &str, body: &Value) -> Result<Option<Value>, RemoteError>;
    /// DELETE /api/<resource>/{id}
    fn delete(&self, id: &str) -> Result<Option<Value>, RemoteError>;
    /// DELETE /api/<resource>（services / users のみ）
    fn delete_all(&self) -> Result<Option<Value>, RemoteError>;
}
