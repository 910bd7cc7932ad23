//! 生の HTTP 応答を JSON 値またはエラーに解釈する
//!
//! 本文は常にテキストとして読んでから判定する:
//! - 2xx で本文が空（空白のみ）→ `Ok(None)`
//! - 2xx で JSON 不正 → `RemoteError::Parse`
//! - 2xx 以外 → `RemoteError::Server`（本文の `message` があればそれ、無ければステータス別の既定文）

use crate::domain::RemoteError;
use crate::ports::outbound::RawResponse;
use serde_json::Value;

/// エラー応答本文からメッセージを決める
fn error_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return "An error occurred".to_string();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(v) => v
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        Err(_) => RemoteError::fallback_message(status),
    }
}

pub fn interpret(response: RawResponse) -> Result<Option<Value>, RemoteError> {
    if !response.is_success() {
        return Err(RemoteError::Server {
            status: response.status,
            message: error_message(response.status, &response.body),
        });
    }
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| RemoteError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::remote_error::{NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
    use serde_json::json;

    #[test]
    fn test_empty_body_is_none() {
        assert_eq!(interpret(RawResponse::new(204, "")).unwrap(), None);
        assert_eq!(interpret(RawResponse::new(200, "  \n")).unwrap(), None);
    }

    #[test]
    fn test_success_json() {
        let v = interpret(RawResponse::new(200, r#"[{"_id":"1"}]"#)).unwrap();
        assert_eq!(v, Some(json!([{"_id": "1"}])));
    }

    #[test]
    fn test_malformed_success_is_parse_error() {
        let err = interpret(RawResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, RemoteError::Parse(_)));
    }

    #[test]
    fn test_error_body_message_wins() {
        let err = interpret(RawResponse::new(400, r#"{"message":"duplicate key"}"#)).unwrap_err();
        assert_eq!(
            err,
            RemoteError::Server {
                status: 400,
                message: "duplicate key".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_error_falls_back_by_status() {
        let err = interpret(RawResponse::new(404, "<html>Not Found</html>")).unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
        let err = interpret(RawResponse::new(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
        let err = interpret(RawResponse::new(403, "nope")).unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().starts_with("Request failed with status 403"));
    }

    #[test]
    fn test_json_error_without_message() {
        let err = interpret(RawResponse::new(422, r#"{"error":"x"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 422");
        let err = interpret(RawResponse::new(500, "")).unwrap_err();
        assert_eq!(err.to_string(), "An error occurred");
    }
}
