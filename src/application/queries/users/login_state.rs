use super::UserQueryService;
use crate::{
    application::{dto::AuthContext, error::ApplicationResult},
    domain::user::Username,
};

impl UserQueryService {
    /// Logged in iff the cookie-supplied username names an existing user.
    /// Store failures propagate to the caller.
    pub async fn resolve_login_state(
        &self,
        cookie_username: Option<&str>,
    ) -> ApplicationResult<AuthContext> {
        let Some(username) = cookie_username.and_then(|raw| Username::new(raw).ok()) else {
            return Ok(AuthContext::anonymous());
        };

        let user = self.user_repo.find_by_username(&username).await?;
        Ok(user
            .as_ref()
            .map(AuthContext::logged_in)
            .unwrap_or_else(AuthContext::anonymous))
    }
}
