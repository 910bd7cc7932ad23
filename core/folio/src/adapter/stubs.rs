//! テスト用: 呼び出しを記録する Stub 群（HTTP・セッション・RemoteStore・確認・ログ）

use crate::domain::{Collection, Entry, RemoteError};
use crate::ports::outbound::{
    Approval, Confirm, HttpTransport, Log, LogRecord, Method, RawResponse, RemoteStore, SessionStore,
};
use common::domain::EntryId;
use common::error::Error;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// RecordingTransport が受けた 1 リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// 用意した応答を順に返す HttpTransport。尽きたら Network エラー
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<RawResponse, RemoteError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn new(responses: Vec<RawResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<RawResponse, RemoteError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<RawResponse, RemoteError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body: body.cloned(),
            bearer: bearer.map(str::to_string),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Network("connection refused".to_string())))
    }
}

/// 固定トークンのセッション
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    pub fn signed_in(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl SessionStore for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn current_user(&self) -> Option<Value> {
        None
    }

    fn sign_in(&self, _token: &str, _user: &Value) -> Result<(), Error> {
        Ok(())
    }

    fn sign_out(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// 結果を差し替えられる RemoteStore。呼び出しを "get_all" / "create" / "update:<id>" / "delete:<id>" で記録する
pub struct StubRemoteStore {
    collection: Collection,
    entries: Vec<Entry>,
    failure: Option<RemoteError>,
    created_id: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubRemoteStore {
    pub fn ok(collection: Collection, entries: Vec<Entry>) -> Self {
        Self {
            collection,
            entries,
            failure: None,
            created_id: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// すべての呼び出しが同じエラーで失敗する
    pub fn failing(collection: Collection, error: RemoteError) -> Self {
        Self {
            failure: Some(error),
            ..Self::ok(collection, Vec::new())
        }
    }

    /// create がこの id を持つエントリを返す
    pub fn with_created_id(mut self, id: &str) -> Self {
        self.created_id = Some(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), RemoteError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl RemoteStore for StubRemoteStore {
    fn collection(&self) -> Collection {
        self.collection
    }

    fn get_all(&self) -> Result<Vec<Entry>, RemoteError> {
        self.record("get_all".to_string())?;
        Ok(self.entries.clone())
    }

    fn create(&self, entry: &Entry) -> Result<Option<Entry>, RemoteError> {
        self.record("create".to_string())?;
        Ok(self.created_id.as_ref().map(|id| {
            let mut e = entry.clone();
            e.id = EntryId::new(id.clone());
            e
        }))
    }

    fn update(&self, id: &EntryId, _entry: &Entry) -> Result<Option<Entry>, RemoteError> {
        self.record(format!("update:{}", id))?;
        Ok(None)
    }

    fn delete(&self, id: &EntryId) -> Result<(), RemoteError> {
        self.record(format!("delete:{}", id))
    }
}

/// 常に同じ答えを返し、表示されたプロンプトを記録する Confirm
pub struct ScriptedConfirm {
    answer: Approval,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answer: Approval) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> Result<Approval, Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer)
    }
}

/// 受け取ったレコードを保持する Log
#[derive(Default)]
pub struct CollectLog {
    records: Mutex<Vec<LogRecord>>,
}

impl CollectLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for CollectLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
