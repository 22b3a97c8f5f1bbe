use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, ValidationErrors};
use crate::presentation::http::{routes::ARTICLES_PATH, views::ViewError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

/// Every failure a handler can end with. Logged-out access and missing
/// articles have dedicated answers; anything else is a server error.
#[derive(Debug)]
pub enum HttpError {
    LoginRequired,
    NotFound,
    Internal(String),
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Unauthorized(_) => Self::LoginRequired,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                Self::NotFound
            }
            other => Self::Internal(other.to_string()),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ViewError> for HttpError {
    fn from(err: ViewError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired => Redirect::to(ARTICLES_PATH).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let payload = ErrorBody {
                    error: status.canonical_reason().unwrap_or("error").to_string(),
                    message,
                };
                (status, Json(payload)).into_response()
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Like `into_http`, but hands rejected form input back to the caller
    /// so it can re-render the form.
    fn into_http_or_form(self) -> HttpResult<Result<T, ValidationErrors>>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_http_or_form(self) -> HttpResult<Result<T, ValidationErrors>> {
        match self {
            Ok(value) => Ok(Ok(value)),
            Err(ApplicationError::InvalidForm(errors)) => Ok(Err(errors)),
            Err(other) => Err(HttpError::from_error(other)),
        }
    }
}
