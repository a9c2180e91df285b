use sqlx::SqlitePool;

use crate::models::comment::{Comment, CommentListing};

const COMMENT_COLUMNS: &str = "id, user_id, photo_id, message, created_at, updated_at";

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
    message: &str,
) -> Result<Comment, sqlx::Error> {
    let now = super::now();
    sqlx::query_as::<_, Comment>(&format!(
        "INSERT INTO comments (user_id, photo_id, message, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(user_id)
    .bind(photo_id)
    .bind(message)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<CommentListing>, sqlx::Error> {
    sqlx::query_as::<_, CommentListing>(
        "SELECT c.id, c.user_id, c.photo_id, c.message, c.created_at, c.updated_at, \
         u.id AS author_id, u.email AS author_email, u.username AS author_username, \
         p.id AS photo_ref_id, p.title AS photo_title, p.caption AS photo_caption, \
         p.photo_url AS photo_url, p.user_id AS photo_owner_id \
         FROM comments c \
         JOIN photos p ON c.photo_id = p.id \
         JOIN users u ON c.user_id = u.id \
         ORDER BY c.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    message: &str,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(&format!(
        "UPDATE comments SET message = ?, updated_at = ? WHERE id = ? AND user_id = ? \
         RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(message)
    .bind(super::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, user_id: i64, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
