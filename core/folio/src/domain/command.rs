//! folio コマンドの enum（Command Pattern）
//!
//! CLI の解析結果を、どのユースケースを呼ぶかが一目で分かる形にしたもの。

use super::collection::Collection;
use super::contact::{ContactForm, SignupForm};
use super::form::FieldOverrides;
use common::domain::EntryId;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum FolioCommand {
    Help,
    /// 統合一覧（seed + remote + local）の表示
    List { collection: Collection, json: bool },
    Add {
        collection: Collection,
        fields: FieldOverrides,
    },
    /// ローカル作成分のみ編集できる
    Edit {
        collection: Collection,
        id: EntryId,
        fields: FieldOverrides,
    },
    Delete { collection: Collection, id: EntryId },
    /// ローカル作成分をすべて消す
    Clear { collection: Collection },
    ContactsList,
    ContactSubmit { form: ContactForm },
    ContactEdit { id: EntryId, form: ContactForm },
    ContactDelete { id: EntryId },
    Signup { form: SignupForm },
    AuthLogin { token: String, user: Option<Value> },
    AuthLogout,
    AuthStatus,
    /// バックエンドへの接続確認
    Status,
}

impl FolioCommand {
    /// ログ用の短い名前
    pub fn name(&self) -> String {
        match self {
            Self::Help => "help".to_string(),
            Self::List { collection, .. } => format!("{} list", collection.name()),
            Self::Add { collection, .. } => format!("{} add", collection.name()),
            Self::Edit { collection, .. } => format!("{} edit", collection.name()),
            Self::Delete { collection, .. } => format!("{} delete", collection.name()),
            Self::Clear { collection } => format!("{} clear", collection.name()),
            Self::ContactsList => "contacts list".to_string(),
            Self::ContactSubmit { .. } => "contacts submit".to_string(),
            Self::ContactEdit { .. } => "contacts edit".to_string(),
            Self::ContactDelete { .. } => "contacts delete".to_string(),
            Self::Signup { .. } => "signup".to_string(),
            Self::AuthLogin { .. } => "auth login".to_string(),
            Self::AuthLogout => "auth logout".to_string(),
            Self::AuthStatus => "auth status".to_string(),
            Self::Status => "status".to_string(),
        }
    }
}
