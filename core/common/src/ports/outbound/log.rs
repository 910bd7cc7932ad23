//! 構造化ログ Outbound ポート
//!
//! 全レイヤー（cli / usecase / adapter）から JSONL ログをファイルに出力するための trait。
//! ユーザー向けのメッセージ（stdout / stderr）とは別チャネル。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: cli, usecase, adapter, wiring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// 例: lifecycle, config, remote, storage, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// 現在時刻で layer / kind 付きのレコードを作る
    pub fn new(level: LogLevel, layer: &str, kind: &str, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            layer: Some(layer.to_string()),
            kind: Some(kind.to_string()),
            fields: None,
        }
    }

    /// fields に 1 件追加する
    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は common::adapter::FileJsonLog（ファイルへ JSONL 追記）や NoopLog（テスト用）など。
/// 呼び出し側はログ失敗でコマンドを失敗させない（戻り値は `let _ =` で捨てる）。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_serialize() {
        let rec = LogRecord {
            ts: "2026-02-07T12:00:00Z".to_string(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!("projects list"));
                Some(m)
            },
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"ts\":\"2026-02-07T12:00:00Z\""));
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"message\":\"command started\""));
        assert!(json.contains("\"layer\":\"cli\""));
        assert!(json.contains("\"kind\":\"lifecycle\""));
        assert!(json.contains("\"command\":\"projects list\""));
    }

    #[test]
    fn test_log_record_builder_fields() {
        let rec = LogRecord::new(LogLevel::Warn, "usecase", "remote", "create failed")
            .field("collection", "projects")
            .field("status", 503);
        let fields = rec.fields.unwrap();
        assert_eq!(fields["collection"], serde_json::json!("projects"));
        assert_eq!(fields["status"], serde_json::json!(503));
        assert_eq!(rec.layer.as_deref(), Some("usecase"));
    }

    #[test]
    fn test_log_record_omits_empty_optionals() {
        let rec = LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Debug,
            message: "x".to_string(),
            layer: None,
            kind: None,
            fields: None,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("layer"));
        assert!(!json.contains("fields"));
    }
}
