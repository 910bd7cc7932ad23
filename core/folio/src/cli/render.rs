//! 一覧・結果の表示用文字列を組み立てる（stdout への出力は main が行う）

use crate::adapter::records::encode_local;
use crate::domain::{Collection, Entry, EntryDetails, Origin};
use crate::usecase::PageView;
use common::error::Error;
use serde_json::Value;

fn origin_name(origin: Origin) -> &'static str {
    match origin {
        Origin::Seed => "seed",
        Origin::Remote => "remote",
        Origin::Local => "local",
    }
}

fn push_line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        out.push_str(&format!("      {}: {}\n", label, v));
    }
}

fn render_entry(out: &mut String, entry: &Entry) {
    let marker = if entry.is_editable() { "  [editable]" } else { "" };
    out.push_str(&format!("  {}  {}{}\n", entry.id, entry.title, marker));
    out.push_str(&format!("      {}\n", entry.description));
    match &entry.details {
        EntryDetails::Project(p) => {
            if !entry.tags.is_empty() {
                out.push_str(&format!("      Technologies: {}\n", entry.tags.join(", ")));
            }
            push_line(out, "Role", p.role.as_deref());
            push_line(out, "Outcome", p.outcome.as_deref());
            push_line(out, "Category", p.category.as_deref());
            push_line(out, "GitHub", p.github.as_deref());
            push_line(out, "Demo", p.demo.as_deref());
        }
        EntryDetails::Service(s) => {
            if !entry.tags.is_empty() {
                out.push_str(&format!("      Features: {}\n", entry.tags.join(", ")));
            }
            push_line(out, "Pricing", s.pricing.as_deref());
        }
    }
}

/// 人間向けの一覧
pub fn render_page(collection: Collection, view: &PageView) -> String {
    let mut out = String::new();
    if let Some(notice) = &view.notice {
        out.push_str(notice);
        out.push('\n');
    }
    let title = match collection {
        Collection::Projects => "Projects",
        Collection::Services => "Services",
    };
    out.push_str(&format!("{} ({})\n", title, view.entries.len()));
    if view.entries.is_empty() {
        out.push_str(&format!("  No {} yet.\n", collection.name()));
    }
    for entry in &view.entries {
        render_entry(&mut out, entry);
    }
    out
}

/// `list --json` の出力（保存形式に origin を足したもの）
pub fn entries_json(entries: &[Entry]) -> Result<String, Error> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut value = encode_local(entry)?;
        if let Value::Object(map) = &mut value {
            map.insert("origin".to_string(), Value::from(origin_name(entry.origin)));
        }
        items.push(value);
    }
    Ok(serde_json::to_string_pretty(&Value::Array(items))?)
}

fn contact_field<'a>(contact: &'a Value, key: &str) -> &'a str {
    contact.get(key).and_then(Value::as_str).unwrap_or("")
}

/// contacts list の表示
pub fn render_contacts(contacts: &[Value]) -> String {
    if contacts.is_empty() {
        return "No contacts.\n".to_string();
    }
    let mut out = String::new();
    for c in contacts {
        let id = match c.get("_id").or_else(|| c.get("id")) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => "-".to_string(),
        };
        let name = format!("{} {}", contact_field(c, "firstName"), contact_field(c, "lastName"));
        out.push_str(&format!("  {}  {} <{}>\n", id, name.trim(), contact_field(c, "email")));
        let message = contact_field(c, "message");
        if !message.is_empty() {
            out.push_str(&format!("      {}\n", message));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::OFFLINE_NOTICE;
    use serde_json::json;

    #[test]
    fn test_render_page_marks_local_entries_and_notice() {
        let view = PageView {
            entries: vec![
                Entry::project("1", "Seeded", "From the app", Origin::Seed).with_tags(["React"]),
                Entry::project("user-1", "Foo", "Bar", Origin::Local),
            ],
            notice: Some(OFFLINE_NOTICE.to_string()),
            loading: false,
        };
        let out = render_page(Collection::Projects, &view);
        assert!(out.starts_with(OFFLINE_NOTICE));
        assert!(out.contains("Projects (2)"));
        assert!(out.contains("Technologies: React"));
        assert!(out.contains("user-1  Foo  [editable]"));
        assert!(!out.contains("Seeded  [editable]"));
    }

    #[test]
    fn test_render_page_empty() {
        let out = render_page(Collection::Services, &PageView::default());
        assert!(out.contains("No services yet."));
    }

    #[test]
    fn test_entries_json_includes_origin() {
        let entries = vec![Entry::service("s1", "Web", "Sites", Origin::Remote)];
        let v: Value = serde_json::from_str(&entries_json(&entries).unwrap()).unwrap();
        assert_eq!(v[0]["title"], "Web");
        assert_eq!(v[0]["origin"], "remote");
    }

    #[test]
    fn test_render_contacts() {
        let out = render_contacts(&[json!({"_id": "c1", "firstName": "Ada", "lastName": "", "email": "ada@example.com", "message": "Hi"})]);
        assert!(out.contains("c1  Ada <ada@example.com>"));
        assert!(out.contains("Hi"));
        assert_eq!(render_contacts(&[]), "No contacts.\n");
    }
}
