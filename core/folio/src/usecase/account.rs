//! サインアップとログイン状態のユースケース

use crate::domain::SignupForm;
use crate::ports::outbound::{JsonResource, SessionStore};
use common::error::Error;
use serde_json::Value;
use std::sync::Arc;

/// ログイン状態の表示用
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<Value>,
}

pub struct AccountUseCase {
    users: Arc<dyn JsonResource>,
    session: Arc<dyn SessionStore>,
}

impl AccountUseCase {
    pub fn new(users: Arc<dyn JsonResource>, session: Arc<dyn SessionStore>) -> Self {
        Self { users, session }
    }

    /// ユーザーを作成する（資格情報なしで送る）。作成されたユーザーを返す
    pub fn signup(&self, form: &SignupForm) -> Result<Option<Value>, Error> {
        form.validate()?;
        let body = serde_json::to_value(form)?;
        Ok(self.users.create(&body)?)
    }

    pub fn login(&self, token: &str, user: Option<Value>) -> Result<(), Error> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::invalid_argument("Token must not be empty"));
        }
        self.session.sign_in(token, &user.unwrap_or(Value::Null))
    }

    pub fn logout(&self) -> Result<(), Error> {
        self.session.sign_out()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            authenticated: self.session.is_authenticated(),
            user: self.session.current_user().filter(|u| !u.is_null()),
        }
    }
}
