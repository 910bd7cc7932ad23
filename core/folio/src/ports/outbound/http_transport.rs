//! HTTP 送受信 Outbound ポート
//!
//! 送信と生の応答（ステータス + 本文テキスト）だけを扱う。応答の解釈は adapter::api_client が行う。

use crate::domain::RemoteError;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// 本文をテキストのまま保持した応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// ベース URL からの相対 endpoint に 1 リクエストを送る
///
/// ホストに到達できない場合のみ `RemoteError::Network` を返す。エラーステータスは Ok で返す。
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<RawResponse, RemoteError>;
}
