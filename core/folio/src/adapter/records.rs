//! Entry と JSON（バックエンド応答・ローカル保存）の相互変換
//!
//! - Project: 主キーは `_id`（無ければ `id`）、タグは `technologies`
//! - Service: 主キーは `id`（無ければ `_id`。数値も受け付け、保存時は読んだときの型で書き戻す）、タグは `features`
//!
//! モデル化していないキー（`isUserProject` など）は `Entry::extra` に残し、保存時にそのまま書き戻す。
//! 型が想定と違う値（文字列欄の配列など）は欠損として扱い、1 件の不正で一覧全体を捨てない。

use crate::domain::{Collection, Entry, EntryDetails, Origin, ProjectDetails, ServiceDetails};
use common::domain::EntryId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// 文字列・数値を文字列として受け取り、それ以外（null・配列など）は None にする
fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// 文字列配列を受け取る。配列以外は空、配列中の文字列以外の要素は捨てる
fn lenient_string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// id を読んだときの JSON 表現のまま受け取る（文字列・数値以外は None）
fn raw_id<'de, D>(d: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(v @ (Value::String(_) | Value::Number(_))) => Some(v),
        _ => None,
    })
}

/// 数値で読んだ Service の id を保存時に同じ型で書き戻すため、extra に控えておくキー
const NUMERIC_ID_KEY: &str = "id";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProjectRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    github: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    demo: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    outcome: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    completion: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ServiceRecord {
    #[serde(default, deserialize_with = "raw_id")]
    id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    features: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pricing: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// extra に残った代替キー（`id` / `_id`）を id として読む
fn alternate_id(extra: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    match extra.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

impl ProjectRecord {
    fn into_entry(self, origin: Origin) -> Entry {
        let id = self
            .id
            .or_else(|| alternate_id(&self.extra, "id"))
            .unwrap_or_default();
        Entry {
            id: EntryId::new(id),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            tags: self.technologies,
            image: self.image,
            origin,
            details: EntryDetails::Project(ProjectDetails {
                github: self.github,
                demo: self.demo,
                role: self.role,
                outcome: self.outcome,
                category: self.category,
                completion: self.completion,
            }),
            extra: self.extra,
        }
    }

    fn from_entry(entry: &Entry, p: &ProjectDetails) -> Self {
        Self {
            id: Some(entry.id.to_string()),
            title: Some(entry.title.clone()),
            description: Some(entry.description.clone()),
            technologies: entry.tags.clone(),
            github: p.github.clone(),
            demo: p.demo.clone(),
            role: p.role.clone(),
            outcome: p.outcome.clone(),
            category: p.category.clone(),
            completion: p.completion.clone(),
            image: entry.image.clone(),
            extra: entry.extra.clone(),
        }
    }
}

impl ServiceRecord {
    fn into_entry(mut self, origin: Origin) -> Entry {
        let id = match self.id {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => {
                let id = n.to_string();
                self.extra.insert(NUMERIC_ID_KEY.to_string(), Value::Number(n));
                Some(id)
            }
            _ => None,
        };
        let id = id.or_else(|| alternate_id(&self.extra, "_id")).unwrap_or_default();
        Entry {
            id: EntryId::new(id),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            tags: self.features,
            image: self.image,
            origin,
            details: EntryDetails::Service(ServiceDetails {
                pricing: self.pricing,
                icon: self.icon,
            }),
            extra: self.extra,
        }
    }

    fn from_entry(entry: &Entry, s: &ServiceDetails) -> Self {
        let mut extra = entry.extra.clone();
        let id = match extra.remove(NUMERIC_ID_KEY) {
            Some(Value::Number(n)) if n.to_string() == entry.id.as_str() => Value::Number(n),
            _ => Value::String(entry.id.to_string()),
        };
        Self {
            id: Some(id),
            title: Some(entry.title.clone()),
            description: Some(entry.description.clone()),
            features: entry.tags.clone(),
            pricing: s.pricing.clone(),
            icon: s.icon.clone(),
            image: entry.image.clone(),
            extra,
        }
    }
}

/// 1 件の JSON オブジェクトを Entry にする
pub fn decode_entry(collection: Collection, value: Value, origin: Origin) -> Result<Entry, serde_json::Error> {
    Ok(match collection {
        Collection::Projects => serde_json::from_value::<ProjectRecord>(value)?.into_entry(origin),
        Collection::Services => serde_json::from_value::<ServiceRecord>(value)?.into_entry(origin),
    })
}

/// JSON 配列を Entry の一覧にする。オブジェクトでない要素は捨てる
pub fn decode_entries(collection: Collection, value: Value, origin: Origin) -> Result<Vec<Entry>, serde_json::Error> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON array of {}, got {}",
                collection.name(),
                type_name(&other)
            )))
        }
    };
    items
        .into_iter()
        .filter(Value::is_object)
        .map(|v| decode_entry(collection, v, origin))
        .collect()
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// ローカル保存用の JSON（id と extra を含む全項目）
pub fn encode_local(entry: &Entry) -> Result<Value, serde_json::Error> {
    match &entry.details {
        EntryDetails::Project(p) => serde_json::to_value(ProjectRecord::from_entry(entry, p)),
        EntryDetails::Service(s) => serde_json::to_value(ServiceRecord::from_entry(entry, s)),
    }
}

/// バックエンドへ送る本文（id・extra は含めない）
pub fn to_remote_payload(entry: &Entry) -> Value {
    match &entry.details {
        EntryDetails::Project(p) => json!({
            "title": entry.title,
            "description": entry.description,
            "completion": p.completion,
            "technologies": entry.tags,
            "github": p.github,
            "demo": p.demo,
            "role": p.role,
            "outcome": p.outcome,
            "category": p.category,
            "image": Value::Null,
        }),
        EntryDetails::Service(s) => json!({
            "title": entry.title,
            "description": entry.description,
            "pricing": s.pricing,
            "features": entry.tags,
            "icon": s.icon,
        }),
    }
}

/// 作成・更新応答からバックエンド id を取り出す（`_id` 優先、無ければ `id`）
pub fn backend_id(value: &Value) -> Option<EntryId> {
    let obj: &Map<String, Value> = value.as_object()?;
    ["_id", "id"].iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(EntryId::new(s.clone())),
        Some(Value::Number(n)) => Some(EntryId::new(n.to_string())),
        _ => None,
    })
}
