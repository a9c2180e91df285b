use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::TokenError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

#[derive(Debug)]
pub enum AppError {
    /// Credential missing or presented in the wrong shape.
    Forbidden(&'static str),
    /// Token present but failed verification.
    Token(TokenError),
    BadRequest(String),
    /// Caller does not own the resource.
    Unauthorized,
    LoginFail,
    NotFound(String),
    Conflict(String),
    Internal(&'static str),
    Sqlx(sqlx::Error),
    PasswordHash(argon2::password_hash::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Forbidden(reason) => write!(f, "forbidden: {reason}"),
            AppError::Token(e) => write!(f, "bad token: {e}"),
            AppError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::LoginFail => write!(f, "invalid email or password"),
            AppError::NotFound(what) => write!(f, "not found: {what}"),
            AppError::Conflict(msg) => write!(f, "conflict: {msg}"),
            AppError::Internal(reason) => write!(f, "internal error: {reason}"),
            AppError::Sqlx(e) => write!(f, "database error: {e}"),
            AppError::PasswordHash(e) => write!(f, "password hashing error: {e}"),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(inner: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(inner)
    }
}

impl From<TokenError> for AppError {
    fn from(inner: TokenError) -> Self {
        AppError::Token(inner)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Token(TokenError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            // Expired tokens share the 400 of every other verification
            // failure; `reason` tells them apart.
            AppError::Token(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized | AppError::LoginFail => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Sqlx(e) => match e {
                sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
                e if is_unique_violation(e) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorBody {
        let status = self.status();
        let (data, reason) = match self {
            AppError::Forbidden(reason) => ("FORBIDDEN".to_string(), Some(*reason)),
            AppError::Token(e) if status == StatusCode::BAD_REQUEST => {
                ("BAD REQUEST".to_string(), Some(e.reason()))
            }
            AppError::BadRequest(msg) => (msg.clone(), None),
            AppError::Unauthorized => ("UNAUTHORIZED".to_string(), None),
            AppError::LoginFail => ("UNAUTHORIZED".to_string(), Some("invalid_credentials")),
            AppError::NotFound(what) => (format!("{what} not found"), None),
            AppError::Conflict(msg) => (msg.clone(), None),
            AppError::Internal(reason) => ("INTERNAL SERVER ERROR".to_string(), Some(*reason)),
            AppError::Sqlx(_) if status == StatusCode::NOT_FOUND => ("NOT FOUND".to_string(), None),
            AppError::Sqlx(_) if status == StatusCode::CONFLICT => {
                ("Email or username already exists".to_string(), None)
            }
            _ => ("INTERNAL SERVER ERROR".to_string(), None),
        };

        ErrorBody {
            status: status.as_u16(),
            data,
            reason,
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(self.body())).into_response()
    }
}
