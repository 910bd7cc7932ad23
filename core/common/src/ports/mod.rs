//! Ports & Adapters のポート定義
//!
//! - inbound: なし（common はライブラリのためアプリの入り口を持たない）
//! - outbound: アプリが外界（FS・時刻・環境変数・ストレージ・ログ）を使うための trait

pub mod outbound;
