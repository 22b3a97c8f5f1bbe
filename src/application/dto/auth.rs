use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{User, Username};

/// Login state of the current request, resolved once from the `username` cookie.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<Username>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn logged_in(user: &User) -> Self {
        Self {
            user: Some(user.username.clone()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_login(&self) -> ApplicationResult<&Username> {
        self.user
            .as_ref()
            .ok_or_else(|| ApplicationError::unauthorized("login required"))
    }
}
