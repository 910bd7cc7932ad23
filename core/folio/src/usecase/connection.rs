//! バックエンドへの到達確認

use crate::domain::Resource;
use crate::ports::outbound::{HttpTransport, Method};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub ok: bool,
    pub message: String,
}

impl ConnectionStatus {
    fn new(ok: bool, message: impl Into<String>) -> Self {
        Self {
            ok,
            message: message.into(),
        }
    }
}

pub struct ConnectionCheck {
    transport: Arc<dyn HttpTransport>,
}

impl ConnectionCheck {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// GET /api/projects が 2xx を返すか
    pub fn test_backend_connection(&self) -> ConnectionStatus {
        match self.transport.send(Method::Get, Resource::Projects.endpoint(), None, None) {
            Ok(res) if res.is_success() => ConnectionStatus::new(true, "Backend connected successfully"),
            Ok(res) => ConnectionStatus::new(false, format!("Backend responded with status: {}", res.status)),
            Err(e) => ConnectionStatus::new(false, format!("Connection failed: {}", e)),
        }
    }

    /// GET / の応答本文の `message` を返す
    pub fn check_backend_health(&self) -> ConnectionStatus {
        let res = match self.transport.send(Method::Get, "/", None, None) {
            Ok(res) => res,
            Err(e) => return ConnectionStatus::new(false, format!("Health check failed: {}", e)),
        };
        if !res.is_success() {
            return ConnectionStatus::new(false, "Backend health check failed");
        }
        match serde_json::from_str::<Value>(&res.body) {
            Ok(v) => ConnectionStatus::new(
                true,
                v.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Backend is running"),
            ),
            Err(e) => ConnectionStatus::new(false, format!("Health check failed: {}", e)),
        }
    }
}
