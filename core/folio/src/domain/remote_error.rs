//! バックエンド呼び出しの失敗種別
//!
//! ホームに到達できなかった（Network）のか、到達したがエラー応答だった（Server）のかを
//! 呼び出し側が区別できるようにする。

use common::error::Error;

pub const NOT_FOUND_MESSAGE: &str =
    "API endpoint not found. Please make sure the backend server is deployed and running.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const INVALID_RESPONSE_MESSAGE: &str =
    "Invalid response from server. The backend may not be properly configured.";
pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to the server. Please check if the backend API is deployed and accessible.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// ホストに到達できない（接続拒否・DNS 失敗など）
    #[error("{CANNOT_CONNECT_MESSAGE} ({0})")]
    Network(String),
    /// 2xx 以外の応答
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx だが本文が JSON として不正
    #[error("{INVALID_RESPONSE_MESSAGE} ({0})")]
    Parse(String),
}

impl RemoteError {
    /// ステータスごとの既定メッセージ（本文がエラー JSON でない場合に使う）
    pub fn fallback_message(status: u16) -> String {
        if status == 404 {
            NOT_FOUND_MESSAGE.to_string()
        } else if status >= 500 {
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            format!(
                "Request failed with status {}. The backend may not be available.",
                status
            )
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<RemoteError> for Error {
    fn from(e: RemoteError) -> Self {
        match e {
            RemoteError::Parse(_) => Error::json(e.to_string()),
            _ => Error::http(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_messages_by_status() {
        assert_eq!(RemoteError::fallback_message(404), NOT_FOUND_MESSAGE);
        assert_eq!(RemoteError::fallback_message(500), SERVER_ERROR_MESSAGE);
        assert_eq!(RemoteError::fallback_message(503), SERVER_ERROR_MESSAGE);
        assert_eq!(
            RemoteError::fallback_message(401),
            "Request failed with status 401. The backend may not be available."
        );
    }

    #[test]
    fn test_into_common_error() {
        let e: Error = RemoteError::Parse("eof".to_string()).into();
        assert_eq!(e.exit_code(), 65);
        let e: Error = RemoteError::Network("refused".to_string()).into();
        assert_eq!(e.exit_code(), 69);
        assert!(e.to_string().starts_with("Cannot connect to the server"));
    }
}
