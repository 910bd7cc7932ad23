//! 追加・編集フォームの入力値と検証
//!
//! 入力はすべて文字列で受け取り（元のフォームと同じ）、検証を通ったものだけを
//! Entry / EntryPatch に変換する。検証はネットワーク・ストレージに触れる前に行う。

use super::collection::Collection;
use super::entry::{
    Entry, EntryDetails, EntryPatch, ProjectDetails, ServiceDetails, CATEGORIES, DEFAULT_CATEGORY,
    DEFAULT_SERVICE_ICON,
};
use common::domain::EntryId;
use common::error::Error;

/// フォームのモード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntryId),
}

/// フォームの全フィールド（コレクションに関係ない項目は無視される）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    /// カンマ区切り（Project: technologies / Service: features）
    pub tags: String,
    pub github: String,
    pub demo: String,
    pub role: String,
    pub outcome: String,
    pub category: String,
    pub pricing: String,
    pub icon: String,
}

/// CLI で指定されたフィールドだけを持つ上書き値（未指定は既存値を残す）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub role: Option<String>,
    pub outcome: Option<String>,
    pub category: Option<String>,
    pub pricing: Option<String>,
    pub icon: Option<String>,
}

impl FieldOverrides {
    pub fn apply(&self, fields: &mut FormFields) {
        let pairs: [(&Option<String>, &mut String); 10] = [
            (&self.title, &mut fields.title),
            (&self.description, &mut fields.description),
            (&self.tags, &mut fields.tags),
            (&self.github, &mut fields.github),
            (&self.demo, &mut fields.demo),
            (&self.role, &mut fields.role),
            (&self.outcome, &mut fields.outcome),
            (&self.category, &mut fields.category),
            (&self.pricing, &mut fields.pricing),
            (&self.icon, &mut fields.icon),
        ];
        for (value, slot) in pairs {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// カンマ区切りの入力をリストにする（各要素を trim し、空要素は捨てる）
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

impl FormFields {
    /// 既存エントリから編集用の初期値を作る（tags は ", " で連結）
    pub fn from_entry(entry: &Entry) -> Self {
        let mut f = FormFields {
            title: entry.title.clone(),
            description: entry.description.clone(),
            tags: entry.tags.join(", "),
            ..Default::default()
        };
        match &entry.details {
            EntryDetails::Project(p) => {
                f.github = p.github.clone().unwrap_or_default();
                f.demo = p.demo.clone().unwrap_or_default();
                f.role = p.role.clone().unwrap_or_default();
                f.outcome = p.outcome.clone().unwrap_or_default();
                f.category = p.category.clone().unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            }
            EntryDetails::Service(s) => {
                f.pricing = s.pricing.clone().unwrap_or_default();
                f.icon = s.icon.clone().unwrap_or_else(|| DEFAULT_SERVICE_ICON.to_string());
            }
        }
        f
    }

    /// 必須項目と選択肢を検証する
    ///
    /// - title / description は必須（空白のみも不可）
    /// - Service は pricing も必須
    /// - Project の category は web / mobile / desktop / other のいずれか（空なら web）
    pub fn validate(&self, collection: Collection) -> Result<(), Error> {
        let label = collection.label();
        if self.title.trim().is_empty() {
            return Err(Error::validation(format!("{} title is required", label)));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation(format!("{} description is required", label)));
        }
        match collection {
            Collection::Projects => {
                let category = self.category.trim();
                if !category.is_empty() && !CATEGORIES.contains(&category) {
                    return Err(Error::validation(format!(
                        "Unknown category '{}' (expected one of: {})",
                        category,
                        CATEGORIES.join(", ")
                    )));
                }
            }
            Collection::Services => {
                if self.pricing.trim().is_empty() {
                    return Err(Error::validation("Service pricing is required"));
                }
            }
        }
        Ok(())
    }

    fn details(&self, collection: Collection) -> EntryDetails {
        match collection {
            Collection::Projects => EntryDetails::Project(ProjectDetails {
                github: non_empty(&self.github),
                demo: non_empty(&self.demo),
                role: non_empty(&self.role),
                outcome: non_empty(&self.outcome),
                category: Some(
                    non_empty(&self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                ),
                completion: None,
            }),
            Collection::Services => EntryDetails::Service(ServiceDetails {
                pricing: non_empty(&self.pricing),
                icon: Some(non_empty(&self.icon).unwrap_or_else(|| DEFAULT_SERVICE_ICON.to_string())),
            }),
        }
    }

    /// 検証済み入力から部分更新を作る
    pub fn to_patch(&self, collection: Collection) -> Result<EntryPatch, Error> {
        self.validate(collection)?;
        Ok(EntryPatch {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            tags: parse_tags(&self.tags),
            details: self.details(collection),
        })
    }
}
