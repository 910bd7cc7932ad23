//! キー/値ストレージ Outbound ポート（ブラウザの localStorage 相当）
//!
//! 値は常に文字列。配列などは呼び出し側が JSON 文字列にして保存する。
//! 単一プロセス・単一スレッド前提だが、別プロセスと同じファイルを共有しうるため
//! 実装は get のたびに最新の永続状態を読むこと。

use crate::error::Error;

/// 文字列キーと文字列値の永続ストア
///
/// 実装は `common::adapter::FileKeyValueStore`（JSON ファイル）と
/// `common::adapter::MemoryKeyValueStore`（テスト用）。
pub trait KeyValueStore: Send + Sync {
    /// キーに対応する値。未設定なら Ok(None)
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
    /// キーを削除する。未設定でもエラーにしない
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}
