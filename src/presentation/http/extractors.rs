// src/presentation/http/extractors.rs
use crate::{
    application::dto::AuthContext,
    presentation::http::{error::IntoHttpResult, state::HttpState},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use super::error::HttpError;

pub const USERNAME_COOKIE: &str = "username";

/// Login state of the request, resolved once against the user store.
#[derive(Debug, Clone)]
pub struct LoginState(pub AuthContext);

impl<S> FromRequestParts<S> for LoginState
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::internal("application state missing"))?;

        let cookie = parts.headers.typed_get::<Cookie>();
        let username = cookie
            .as_ref()
            .and_then(|c| c.get(USERNAME_COOKIE))
            .map(decode_cookie_value);

        let auth = app_state
            .services
            .user_queries
            .resolve_login_state(username.as_deref())
            .await
            .into_http()?;

        Ok(Self(auth))
    }
}

/// Cookie values arrive percent-encoded; undecodable values are used as sent.
fn decode_cookie_value(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}
