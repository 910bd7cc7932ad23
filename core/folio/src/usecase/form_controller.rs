//! 追加・編集・削除のユースケース（remote はベストエフォート、local は必ず書く）
//!
//! 検証はどのストアにも触れる前に行う。remote の失敗は warn ログに残し、結果の `WriteOutcome` で返す。
//! 同じコントローラで送信中に次の送信が来た場合は busy エラーにする。

use crate::domain::outcome::{created_message, deleted_message, updated_message};
use crate::domain::{
    Collection, DeleteOutcome, Entry, EntryDetails, EntryPatch, FormFields, FormMode, LocalStatus, Origin,
    ProjectDetails, RemoteError, RemoteStatus, ServiceDetails, SubmitOutcome, WriteOutcome,
};
use crate::ports::outbound::{
    Approval, Clock, Confirm, IdGenerator, LocalOverlayStore, Log, LogLevel, LogRecord, RemoteStore,
};
use chrono::{DateTime, SecondsFormat, Utc};
use common::domain::EntryId;
use common::error::Error;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ms を `2024-01-15T00:00:00.000Z` 形式にする
pub fn iso_from_ms(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 送信中フラグを解除する guard
pub(crate) struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct FormDeps {
    pub remote: Option<Arc<dyn RemoteStore>>,
    pub local: Arc<dyn LocalOverlayStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
    pub confirm: Arc<dyn Confirm>,
    pub log: Arc<dyn Log>,
}

pub struct FormController {
    collection: Collection,
    deps: FormDeps,
    in_flight: AtomicBool,
}

impl FormController {
    pub fn new(collection: Collection, deps: FormDeps) -> Self {
        Self {
            collection,
            deps,
            in_flight: AtomicBool::new(false),
        }
    }

    fn begin(&self) -> Result<InFlight<'_>, Error> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| Error::system("Another submission is already in progress. Please wait."))?;
        Ok(InFlight(&self.in_flight))
    }

    fn remote_failed(&self, op: &str, id: &EntryId, e: &RemoteError) -> RemoteStatus {
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Warn, "usecase", "remote", format!("{} failed; using local storage", op))
                .field("collection", self.collection.name())
                .field("id", id.as_str())
                .field("error", e.to_string()),
        );
        RemoteStatus::Failed(e.to_string())
    }

    /// 作成・編集フォームを送信する
    pub fn submit(&self, fields: &FormFields, mode: FormMode) -> Result<SubmitOutcome, Error> {
        let patch = fields.to_patch(self.collection)?;
        if let FormMode::Edit(id) = &mode {
            if self.deps.local.find(id).is_none() {
                return Err(Error::validation(format!(
                    "{} {} cannot be edited: only entries added on this device are editable",
                    self.collection.label(),
                    id
                )));
            }
        }
        let _guard = self.begin()?;
        match mode {
            FormMode::Create => self.create(patch),
            FormMode::Edit(id) => self.update(&id, patch),
        }
    }

    fn create(&self, patch: EntryPatch) -> Result<SubmitOutcome, Error> {
        let id = self.deps.ids.next_id();
        let details = match self.collection {
            Collection::Projects => EntryDetails::Project(ProjectDetails::default()),
            Collection::Services => EntryDetails::Service(ServiceDetails::default()),
        };
        let mut entry = Entry::project(id, "", "", Origin::Local).with_details(details);
        patch.apply_to(&mut entry);
        if let EntryDetails::Project(p) = &mut entry.details {
            p.completion = Some(iso_from_ms(self.deps.clock.now_ms()));
        }
        entry
            .extra
            .insert(self.collection.user_flag().to_string(), Value::Bool(true));

        let remote = match &self.deps.remote {
            None => RemoteStatus::Skipped,
            Some(remote) => match remote.create(&entry) {
                Ok(created) => {
                    if let Some(created) = created {
                        entry.id = created.id;
                    }
                    RemoteStatus::Ok
                }
                Err(e) => self.remote_failed("create", &entry.id, &e),
            },
        };

        self.deps.local.add(entry.clone())?;
        let write = WriteOutcome {
            remote,
            local: LocalStatus::Saved,
        };
        let message = created_message(self.collection, &write);
        Ok(SubmitOutcome { entry, write, message })
    }

    fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<SubmitOutcome, Error> {
        let mut candidate = self
            .deps
            .local
            .find(id)
            .ok_or_else(|| Error::validation(format!("{} {} no longer exists", self.collection.label(), id)))?;
        patch.apply_to(&mut candidate);

        let remote = match &self.deps.remote {
            None => RemoteStatus::Skipped,
            Some(remote) => match remote.update(id, &candidate) {
                Ok(_) => RemoteStatus::Ok,
                Err(e) => self.remote_failed("update", id, &e),
            },
        };

        let (entries, local) = self.deps.local.update(id, &patch)?;
        let entry = entries.into_iter().find(|e| &e.id == id).unwrap_or(candidate);
        let write = WriteOutcome { remote, local };
        let message = updated_message(self.collection, &write);
        Ok(SubmitOutcome { entry, write, message })
    }

    /// 確認の上で削除する。拒否された場合はどのストアにも触れない
    ///
    /// ローカル作成分に無い id は確認も remote も行わず、Unchanged を返す。
    pub fn delete(&self, id: &EntryId) -> Result<DeleteOutcome, Error> {
        if self.deps.local.find(id).is_none() {
            let write = WriteOutcome {
                remote: RemoteStatus::Skipped,
                local: LocalStatus::Unchanged,
            };
            let message = deleted_message(self.collection, &write);
            return Ok(DeleteOutcome::Deleted { write, message });
        }
        let prompt = format!(
            "Are you sure you want to delete this {}? This action cannot be undone.",
            self.collection.label().to_lowercase()
        );
        if self.deps.confirm.confirm(&prompt)? == Approval::Denied {
            return Ok(DeleteOutcome::Cancelled);
        }
        let _guard = self.begin()?;

        let remote = match &self.deps.remote {
            None => RemoteStatus::Skipped,
            Some(remote) => match remote.delete(id) {
                Ok(()) => RemoteStatus::Ok,
                Err(e) => self.remote_failed("delete", id, &e),
            },
        };
        let (_, local) = self.deps.local.remove(id)?;
        let write = WriteOutcome { remote, local };
        let message = deleted_message(self.collection, &write);
        Ok(DeleteOutcome::Deleted { write, message })
    }

    /// 確認の上でローカル作成分をすべて消す（remote には触れない）。消した場合 true
    pub fn clear(&self) -> Result<bool, Error> {
        let prompt = format!(
            "Remove all locally added {}? This action cannot be undone.",
            self.collection.name()
        );
        if self.deps.confirm.confirm(&prompt)? == Approval::Denied {
            return Ok(false);
        }
        let _guard = self.begin()?;
        self.deps.local.clear()?;
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "storage", "cleared local entries")
                .field("collection", self.collection.name()),
        );
        Ok(true)
    }

    /// 編集フォームの初期値（ローカル作成分のみ）
    pub fn edit_fields(&self, id: &EntryId) -> Option<FormFields> {
        self.deps.local.find(id).map(|e| FormFields::from_entry(&e))
    }

    #[cfg(test)]
    pub(crate) fn hold_in_flight(&self) -> Result<InFlight<'_>, Error> {
        self.begin()
    }
}
