//! folio 共通ライブラリ
//!
//! CLI（folio）から使う、I/O を trait で隔離した土台を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（FS・時刻・環境変数・ストレージ・ログ）
pub mod ports;

/// ポートの標準実装とテスト用実装
pub mod adapter;
