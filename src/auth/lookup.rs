use async_trait::async_trait;
use thiserror::Error;

use crate::models::user::User;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("account not found")]
    NotFound,
    #[error("account lookup failed: {0}")]
    Transient(String),
}

/// Resolves a token subject to the account it names.
///
/// Called once per authenticated request; results are never cached so a
/// deleted account stops authenticating immediately.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    async fn get_account_by_id(&self, id: i64) -> Result<User, LookupError>;
}
