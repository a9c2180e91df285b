use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::models::user::User;

/// The account resolved by the gate for the request being handled.
///
/// Lives in the request extensions only, so concurrent requests never see
/// each other's caller.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub User);

impl CurrentAccount {
    pub fn id(&self) -> i64 {
        self.0.id
    }
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or(AppError::Forbidden("missing_identity"))
    }
}
