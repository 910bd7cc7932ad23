//! Outbound ポートの実装（HTTP・ローカルストレージ・確認プロンプト・設定）

pub(crate) mod api_client;
pub(crate) mod config;
pub(crate) mod confirm;
pub(crate) mod http_resource;
pub(crate) mod kv_local_overlay_store;
pub(crate) mod records;
pub(crate) mod reqwest_transport;
pub(crate) mod session;
#[cfg(test)]
pub(crate) mod stubs;

pub(crate) use config::{load_config, resolve_config};
pub(crate) use confirm::{AssumeYesConfirm, CliConfirm, NonInteractiveConfirm};
pub(crate) use http_resource::{HttpRemoteStore, HttpResource};
pub(crate) use kv_local_overlay_store::KvLocalOverlayStore;
pub(crate) use reqwest_transport::ReqwestTransport;
pub(crate) use session::KvSession;
