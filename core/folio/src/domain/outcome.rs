//! 二段書き込み（remote はベストエフォート、local は必須）の結果
//!
//! remote の失敗を握りつぶさず、呼び出し側・テストが両方の段を個別に確認できるようにする。

use super::collection::Collection;
use super::entry::Entry;

/// remote 段の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    Ok,
    /// 失敗理由（ユーザー向けメッセージ）
    Failed(String),
    /// --offline、またはローカル作成分に無い id のため呼ばなかった
    Skipped,
}

impl RemoteStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// local 段の結果（失敗はエラーとして呼び出し元へ返すため、ここには現れない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalStatus {
    Saved,
    /// 対象 id が無く、永続状態を変えなかった
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub remote: RemoteStatus,
    pub local: LocalStatus,
}

impl WriteOutcome {
    /// どちらのストアに反映されたかを示す短い注記
    pub fn store_note(&self) -> String {
        match (&self.remote, self.local) {
            (RemoteStatus::Ok, LocalStatus::Saved) => "saved to server and local storage".to_string(),
            (RemoteStatus::Ok, LocalStatus::Unchanged) => "server updated; nothing stored locally".to_string(),
            (RemoteStatus::Failed(reason), LocalStatus::Saved) => {
                format!("saved to local storage only; server: {}", reason)
            }
            (RemoteStatus::Failed(reason), LocalStatus::Unchanged) => {
                format!("nothing changed; server: {}", reason)
            }
            (RemoteStatus::Skipped, LocalStatus::Saved) => "saved to local storage (offline)".to_string(),
            (RemoteStatus::Skipped, LocalStatus::Unchanged) => {
                "nothing changed; no locally added entry has this id".to_string()
            }
        }
    }
}

/// フォーム送信（作成・編集）の結果
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub entry: Entry,
    pub write: WriteOutcome,
    /// トースト相当のユーザー向けメッセージ
    pub message: String,
}

/// 削除の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 確認で拒否された（どのストアにも触れていない）
    Cancelled,
    Deleted { write: WriteOutcome, message: String },
}

pub fn created_message(collection: Collection, write: &WriteOutcome) -> String {
    format!(
        "{} added successfully! It will appear in the {} list. ({})",
        collection.label(),
        collection.name(),
        write.store_note()
    )
}

pub fn updated_message(collection: Collection, write: &WriteOutcome) -> String {
    format!("{} updated successfully! ({})", collection.label(), write.store_note())
}

pub fn deleted_message(collection: Collection, write: &WriteOutcome) -> String {
    format!("{} deleted successfully! ({})", collection.label(), write.store_note())
}
