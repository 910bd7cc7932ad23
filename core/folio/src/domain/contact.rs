//! 問い合わせフォーム（remote 専用。ローカルには保存しない）

use common::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email address has already been submitted. Please use a different email.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

/// メールアドレスとして最低限の形（空白なしで `@` を 1 つ含む）か
pub fn is_plausible_email(s: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .map_or(false, |re| re.is_match(s))
}

/// バックエンドへ送る問い合わせ本文（camelCase）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// 全フィールドを trim したコピー
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// firstName / email / message は必須。email は形式も確認する
    pub fn validate(&self) -> Result<(), Error> {
        let f = self.trimmed();
        if f.first_name.is_empty() {
            return Err(Error::validation("First name is required"));
        }
        if f.email.is_empty() {
            return Err(Error::validation("Email address is required"));
        }
        if !is_plausible_email(&f.email) {
            return Err(Error::validation(format!("Invalid email address: {}", f.email)));
        }
        if f.message.is_empty() {
            return Err(Error::validation("Message is required"));
        }
        Ok(())
    }
}

/// 問い合わせ送信失敗のメッセージをユーザー向けに変換する
pub fn friendly_contact_error(message: &str) -> String {
    if message.contains("unique") || message.contains("duplicate") {
        DUPLICATE_EMAIL_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}

/// サインアップ本文。password はログに出さない
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: Option<String>,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), Error> {
        if self.first_name.trim().is_empty() {
            return Err(Error::validation("First name is required"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(Error::validation(format!("Invalid email address: {}", self.email.trim())));
        }
        if self.password.is_empty() {
            return Err(Error::validation("Password is required"));
        }
        if let Some(confirm) = &self.confirm_password {
            if confirm != &self.password {
                return Err(Error::validation("Passwords do not match"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: " ada@example.com ".to_string(),
            phone: String::new(),
            message: " Hello ".to_string(),
        }
    }

    #[test]
    fn test_contact_trimmed_and_valid() {
        let c = contact();
        assert!(c.validate().is_ok());
        let t = c.trimmed();
        assert_eq!(t.first_name, "Ada");
        assert_eq!(t.email, "ada@example.com");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
    }

    #[test]
    fn test_contact_required_fields() {
        let mut c = contact();
        c.message = "   ".to_string();
        assert_eq!(c.validate().unwrap_err().to_string(), "Message is required");
        let mut c = contact();
        c.email = "not-an-email".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_friendly_contact_error() {
        assert_eq!(
            friendly_contact_error("E11000 duplicate key error"),
            DUPLICATE_EMAIL_MESSAGE
        );
        assert_eq!(friendly_contact_error("Server error."), "Server error.");
    }

    #[test]
    fn test_signup_validation_and_debug_hides_password() {
        let mut s = SignupForm {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: Some("secret123".to_string()),
        };
        assert!(s.validate().is_ok());
        assert!(!format!("{:?}", s).contains("secret123"));
        s.confirm_password = Some("other".to_string());
        assert!(s.validate().is_err());
    }
}
