//! 問い合わせのユースケース（remote のみ。ローカルには保存しない）

use crate::domain::contact::friendly_contact_error;
use crate::domain::remote_error::CANNOT_CONNECT_MESSAGE;
use crate::domain::{ContactForm, RemoteError};
use crate::ports::outbound::{Approval, Confirm, JsonResource, Log, LogLevel, LogRecord};
use common::domain::EntryId;
use common::error::Error;
use serde_json::Value;
use std::sync::Arc;

pub struct ContactsUseCase {
    contacts: Arc<dyn JsonResource>,
    confirm: Arc<dyn Confirm>,
    log: Arc<dyn Log>,
}

impl ContactsUseCase {
    pub fn new(contacts: Arc<dyn JsonResource>, confirm: Arc<dyn Confirm>, log: Arc<dyn Log>) -> Self {
        Self { contacts, confirm, log }
    }

    /// 送信失敗をユーザー向けのエラーにする
    fn submit_error(&self, op: &str, e: RemoteError) -> Error {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, "usecase", "remote", format!("contact {} failed", op))
                .field("error", e.to_string()),
        );
        match e {
            RemoteError::Network(_) => Error::http(CANNOT_CONNECT_MESSAGE),
            RemoteError::Server { message, .. } => Error::http(friendly_contact_error(&message)),
            RemoteError::Parse(_) => e.into(),
        }
    }

    pub fn list(&self) -> Result<Vec<Value>, Error> {
        match self.contacts.list()? {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(Error::json("Expected a JSON array of contacts")),
        }
    }

    pub fn submit(&self, form: &ContactForm) -> Result<String, Error> {
        form.validate()?;
        let body = serde_json::to_value(form.trimmed())?;
        self.contacts
            .create(&body)
            .map_err(|e| self.submit_error("submit", e))?;
        Ok("Contact submitted successfully!".to_string())
    }

    pub fn edit(&self, id: &EntryId, form: &ContactForm) -> Result<String, Error> {
        form.validate()?;
        let body = serde_json::to_value(form.trimmed())?;
        self.contacts
            .update(id.as_str(), &body)
            .map_err(|e| self.submit_error("update", e))?;
        Ok("Contact updated successfully!".to_string())
    }

    /// 確認の上で削除する。拒否されたら None
    pub fn delete(&self, id: &EntryId) -> Result<Option<String>, Error> {
        if self
            .confirm
            .confirm("Are you sure you want to delete this contact? This action cannot be undone.")?
            == Approval::Denied
        {
            return Ok(None);
        }
        self.contacts.delete(id.as_str()).map_err(|e| {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "usecase", "remote", "contact delete failed")
                    .field("id", id.as_str())
                    .field("error", e.to_string()),
            );
            Error::http(format!("Failed to delete contact. Please try again. ({})", e))
        })?;
        Ok(Some("Contact deleted successfully!".to_string()))
    }
}
