//! コレクション（projects / services）と REST リソースの定義

use std::collections::BTreeSet;

/// Project 一覧から常に除外するタイトル（seed / remote 由来のみ対象）
pub const PROJECT_DENYLIST: &[&str] = &["Portfolio Website", "portfolio website", "Portfolio website"];

/// ユーザーが追加・編集できるコレクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Services,
}

impl Collection {
    /// ローカルストレージのキー
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Projects => "userProjects",
            Self::Services => "userServices",
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Self::Projects => Resource::Projects,
            Self::Services => Resource::Services,
        }
    }

    /// CLI・ログで使う名前（複数形）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Services => "services",
        }
    }

    /// メッセージ用の単数ラベル（"Project" / "Service"）
    pub fn label(&self) -> &'static str {
        match self {
            Self::Projects => "Project",
            Self::Services => "Service",
        }
    }

    /// ローカル作成分に付ける印のキー（`isUserProject` / `isUserService`）
    pub fn user_flag(&self) -> &'static str {
        match self {
            Self::Projects => "isUserProject",
            Self::Services => "isUserService",
        }
    }

    pub fn denylist(&self) -> BTreeSet<String> {
        match self {
            Self::Projects => PROJECT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            Self::Services => BTreeSet::new(),
        }
    }
}

/// バックエンドの REST リソース（`/api/<path>`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Projects,
    Services,
    Contacts,
    Users,
}

impl Resource {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Projects => "/api/projects",
            Self::Services => "/api/services",
            Self::Contacts => "/api/contacts",
            Self::Users => "/api/users",
        }
    }

    pub fn item_endpoint(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint(), id)
    }

    /// 読み取りにも資格情報が要るか（contacts / users）
    pub fn protected_reads(&self) -> bool {
        matches!(self, Self::Contacts | Self::Users)
    }

    /// 資格情報なしで作成できるか（users の作成 = サインアップ）
    pub fn open_create(&self) -> bool {
        matches!(self, Self::Users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(Collection::Projects.storage_key(), "userProjects");
        assert_eq!(Collection::Services.storage_key(), "userServices");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Resource::Projects.item_endpoint("abc"), "/api/projects/abc");
        assert_eq!(Collection::Services.resource().endpoint(), "/api/services");
        assert!(Resource::Contacts.protected_reads());
        assert!(!Resource::Projects.protected_reads());
        assert!(Resource::Users.open_create());
        assert!(!Resource::Contacts.open_create());
    }

    #[test]
    fn test_denylist_only_for_projects() {
        assert!(Collection::Projects.denylist().contains("Portfolio Website"));
        assert!(Collection::Services.denylist().is_empty());
    }
}
