use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::auth::{AccountLookup, LookupError};
use crate::models::user::User;

const USER_COLUMNS: &str = "id, username, email, password_hash, age, created_at, updated_at";

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
    age: i64,
) -> Result<User, sqlx::Error> {
    let now = super::now();
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (username, email, password_hash, age, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
    ))
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(age)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    email: &str,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET email = ?, username = ?, updated_at = ? WHERE id = ? \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(email)
    .bind(username)
    .bind(super::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete an account together with everything it owns, including comments
/// other users left on its photos.
pub async fn delete_with_content(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM comments WHERE user_id = ? \
         OR photo_id IN (SELECT id FROM photos WHERE user_id = ?)",
    )
    .bind(id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM social_medias WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM photos WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let deleted = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(deleted)
}

/// Account lookup backed by the `users` table.
#[derive(Clone)]
pub struct SqliteAccounts {
    pool: SqlitePool,
}

impl SqliteAccounts {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountLookup for SqliteAccounts {
    async fn get_account_by_id(&self, id: i64) -> Result<User, LookupError> {
        find_by_id(&self.pool, id)
            .await
            .map_err(|e| LookupError::Transient(e.to_string()))?
            .ok_or(LookupError::NotFound)
    }
}
