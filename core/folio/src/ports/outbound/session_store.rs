//! ログイン状態（トークンとユーザー情報）の Outbound ポート

use common::error::Error;
use serde_json::Value;

pub trait SessionStore: Send + Sync {
    /// 保存済みトークン。読めない場合は None
    fn token(&self) -> Option<String>;

    /// 保存済みユーザー情報。破損した JSON は None
    fn current_user(&self) -> Option<Value>;

    fn sign_in(&self, token: &str, user: &Value) -> Result<(), Error>;

    fn sign_out(&self) -> Result<(), Error>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
