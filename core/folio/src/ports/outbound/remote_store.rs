//! コレクション単位のバックエンド Outbound ポート（Entry 型で読み書きする）

use crate::domain::{Collection, Entry, RemoteError};
use common::domain::EntryId;

pub trait RemoteStore: Send + Sync {
    fn collection(&self) -> Collection;

    /// 一覧を取得する。本文が空なら空リスト
    fn get_all(&self) -> Result<Vec<Entry>, RemoteError>;

    /// 作成する。応答に本文があれば作成されたエントリ（バックエンド id 付き）を返す
    fn create(&self, entry: &Entry) -> Result<Option<Entry>, RemoteError>;

    fn update(&self, id: &EntryId, entry: &Entry) -> Result<Option<Entry>, RemoteError>;

    fn delete(&self, id: &EntryId) -> Result<(), RemoteError>;
}
