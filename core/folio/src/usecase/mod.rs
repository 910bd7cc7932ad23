//! ユースケース層（ポート越しにバックエンド・ローカルストレージを使う）

pub mod account;
pub mod connection;
pub mod contacts;
pub mod form_controller;
pub mod page;
pub mod reconcile;

pub use account::{AccountUseCase, AuthStatus};
pub use connection::{ConnectionCheck, ConnectionStatus};
pub use contacts::ContactsUseCase;
pub use form_controller::{FormController, FormDeps};
pub use page::{CollectionPage, PageView, OFFLINE_NOTICE};
pub use reconcile::merge;
