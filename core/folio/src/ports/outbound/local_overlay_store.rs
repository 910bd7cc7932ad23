//! ユーザー作成エントリのローカル保存 Outbound ポート
//!
//! `load` / `save` / `clear` だけを実装すればよい。変更系（add / update / remove）は
//! 既定実装で「最新スナップショットを読み直す → 変更 → 全体を保存」を行う。

use crate::domain::{Collection, Entry, EntryPatch, LocalStatus};
use common::domain::EntryId;
use common::error::Error;

pub trait LocalOverlayStore: Send + Sync {
    fn collection(&self) -> Collection;

    /// 保存済みエントリを返す。未保存・破損時は空（失敗しない）
    fn load(&self) -> Vec<Entry>;

    /// コレクション全体を保存する
    fn save(&self, entries: &[Entry]) -> Result<(), Error>;

    /// 保存済みデータを削除する
    fn clear(&self) -> Result<(), Error>;

    fn add(&self, entry: Entry) -> Result<Vec<Entry>, Error> {
        let mut entries = self.load();
        entries.push(entry);
        self.save(&entries)?;
        Ok(entries)
    }

    /// id が無ければ何も保存せず、そのままの一覧と `Unchanged` を返す
    fn update(&self, id: &EntryId, patch: &EntryPatch) -> Result<(Vec<Entry>, LocalStatus), Error> {
        let mut entries = self.load();
        match entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => patch.apply_to(entry),
            None => return Ok((entries, LocalStatus::Unchanged)),
        }
        self.save(&entries)?;
        Ok((entries, LocalStatus::Saved))
    }

    /// id が無ければ何も保存せず、そのままの一覧と `Unchanged` を返す
    fn remove(&self, id: &EntryId) -> Result<(Vec<Entry>, LocalStatus), Error> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        if entries.len() == before {
            return Ok((entries, LocalStatus::Unchanged));
        }
        self.save(&entries)?;
        Ok((entries, LocalStatus::Saved))
    }

    fn find(&self, id: &EntryId) -> Option<Entry> {
        self.load().into_iter().find(|e| &e.id == id)
    }
}
