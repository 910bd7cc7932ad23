//! 表示・永続化の単位となるエントリ（Project / Service）
//!
//! 両コレクションで共通の骨格（id・title・description・tags・image・origin）を持ち、
//! コレクション固有の項目は `EntryDetails` に分ける。

use common::domain::EntryId;
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_CATEGORY: &str = "web";
pub const CATEGORIES: &[&str] = &["web", "mobile", "desktop", "other"];
pub const DEFAULT_SERVICE_ICON: &str = "fas fa-code";

/// エントリの出どころ。編集・削除できるのは Local のみ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// アプリに同梱された固定エントリ
    Seed,
    /// バックエンドのコレクションから取得したエントリ
    Remote,
    /// ユーザーが作成しローカルストレージに保存したエントリ
    Local,
}

/// Project 固有の項目
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDetails {
    pub github: Option<String>,
    pub demo: Option<String>,
    pub role: Option<String>,
    pub outcome: Option<String>,
    /// web | mobile | desktop | other（バックエンド由来の値はそのまま保持する）
    pub category: Option<String>,
    /// 完了日（ISO8601 文字列）
    pub completion: Option<String>,
}

/// Service 固有の項目
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceDetails {
    pub pricing: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryDetails {
    Project(ProjectDetails),
    Service(ServiceDetails),
}

/// Project または Service の 1 件
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    /// 重複排除のキー（大文字小文字を区別する完全一致）
    pub title: String,
    pub description: String,
    /// Project は technologies、Service は features
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub origin: Origin,
    pub details: EntryDetails,
    /// モデル化していない JSON キー（永続化時にそのまま書き戻す）
    pub extra: BTreeMap<String, Value>,
}

impl Entry {
    pub fn project(id: impl Into<EntryId>, title: &str, description: &str, origin: Origin) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            description: description.to_string(),
            tags: Vec::new(),
            image: None,
            origin,
            details: EntryDetails::Project(ProjectDetails::default()),
            extra: BTreeMap::new(),
        }
    }

    pub fn service(id: impl Into<EntryId>, title: &str, description: &str, origin: Origin) -> Self {
        Self {
            details: EntryDetails::Service(ServiceDetails::default()),
            ..Self::project(id, title, description, origin)
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_details(mut self, details: EntryDetails) -> Self {
        self.details = details;
        self
    }

    /// UI から編集・削除できるか（ローカル作成分のみ）
    pub fn is_editable(&self) -> bool {
        self.origin == Origin::Local
    }

    /// 表示条件（title と description が空でない）を満たすか
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    pub fn as_project(&self) -> Option<&ProjectDetails> {
        match &self.details {
            EntryDetails::Project(p) => Some(p),
            EntryDetails::Service(_) => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceDetails> {
        match &self.details {
            EntryDetails::Service(s) => Some(s),
            EntryDetails::Project(_) => None,
        }
    }
}

/// 編集フォームから作る部分更新。id・image・completion・origin は変更しない
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPatch {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub details: EntryDetails,
}

impl EntryPatch {
    /// エントリに上書き適用する。completion は既存値を残す
    pub fn apply_to(&self, entry: &mut Entry) {
        entry.title = self.title.clone();
        entry.description = self.description.clone();
        entry.tags = self.tags.clone();
        entry.details = match (&entry.details, &self.details) {
            (EntryDetails::Project(old), EntryDetails::Project(new)) => {
                EntryDetails::Project(ProjectDetails {
                    completion: old.completion.clone(),
                    ..new.clone()
                })
            }
            (_, new) => new.clone(),
        };
    }
}
