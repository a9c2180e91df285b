use sqlx::SqlitePool;

use crate::models::photo::{Photo, PhotoListing, PhotoPayload};

const PHOTO_COLUMNS: &str = "id, title, caption, photo_url, user_id, created_at, updated_at";

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    photo: &PhotoPayload,
) -> Result<Photo, sqlx::Error> {
    let now = super::now();
    sqlx::query_as::<_, Photo>(&format!(
        "INSERT INTO photos (title, caption, photo_url, user_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {PHOTO_COLUMNS}"
    ))
    .bind(&photo.title)
    .bind(&photo.caption)
    .bind(&photo.photo_url)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<PhotoListing>, sqlx::Error> {
    sqlx::query_as::<_, PhotoListing>(
        "SELECT p.id, p.title, p.caption, p.photo_url, p.user_id, p.created_at, p.updated_at, \
         u.email, u.username \
         FROM photos p JOIN users u ON p.user_id = u.id \
         ORDER BY p.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Photo>, sqlx::Error> {
    sqlx::query_as::<_, Photo>(&format!("SELECT {PHOTO_COLUMNS} FROM photos WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    photo: &PhotoPayload,
) -> Result<Option<Photo>, sqlx::Error> {
    sqlx::query_as::<_, Photo>(&format!(
        "UPDATE photos SET title = ?, caption = ?, photo_url = ?, updated_at = ? \
         WHERE id = ? AND user_id = ? RETURNING {PHOTO_COLUMNS}"
    ))
    .bind(&photo.title)
    .bind(&photo.caption)
    .bind(&photo.photo_url)
    .bind(super::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete a photo and the comments left on it.
pub async fn delete(pool: &SqlitePool, user_id: i64, id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM comments WHERE photo_id IN \
         (SELECT id FROM photos WHERE id = ? AND user_id = ?)",
    )
    .bind(id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    let deleted = sqlx::query("DELETE FROM photos WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(deleted)
}
