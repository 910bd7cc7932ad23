//! Outbound ポート: アプリが外界（バックエンド・ローカルストレージ・確認プロンプト）を使うための trait

pub mod confirm;
pub mod http_transport;
pub mod json_resource;
pub mod local_overlay_store;
pub mod remote_store;
pub mod session_store;

pub use common::ports::outbound::{Clock, IdGenerator, KeyValueStore, Log, LogLevel, LogRecord};
pub use confirm::{Approval, Confirm};
pub use http_transport::{HttpTransport, Method, RawResponse};
pub use json_resource::JsonResource;
pub use local_overlay_store::LocalOverlayStore;
pub use remote_store::RemoteStore;
pub use session_store::SessionStore;
