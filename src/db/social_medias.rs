use sqlx::SqlitePool;

use crate::models::social_media::{SocialMedia, SocialMediaListing, SocialMediaPayload};

const SOCIAL_MEDIA_COLUMNS: &str =
    "id, name, social_media_url, profile_image_url, user_id, created_at, updated_at";

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    link: &SocialMediaPayload,
) -> Result<SocialMedia, sqlx::Error> {
    let now = super::now();
    sqlx::query_as::<_, SocialMedia>(&format!(
        "INSERT INTO social_medias \
         (name, social_media_url, profile_image_url, user_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {SOCIAL_MEDIA_COLUMNS}"
    ))
    .bind(&link.name)
    .bind(&link.social_media_url)
    .bind(link.profile_image_url())
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<SocialMediaListing>, sqlx::Error> {
    sqlx::query_as::<_, SocialMediaListing>(
        "SELECT s.id, s.name, s.social_media_url, s.profile_image_url, s.user_id, \
         s.created_at, s.updated_at, u.id AS owner_id, u.username AS owner_username \
         FROM social_medias s JOIN users u ON s.user_id = u.id \
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<SocialMedia>, sqlx::Error> {
    sqlx::query_as::<_, SocialMedia>(&format!(
        "SELECT {SOCIAL_MEDIA_COLUMNS} FROM social_medias WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    link: &SocialMediaPayload,
) -> Result<Option<SocialMedia>, sqlx::Error> {
    sqlx::query_as::<_, SocialMedia>(&format!(
        "UPDATE social_medias SET name = ?, social_media_url = ?, profile_image_url = ?, \
         updated_at = ? WHERE id = ? AND user_id = ? RETURNING {SOCIAL_MEDIA_COLUMNS}"
    ))
    .bind(&link.name)
    .bind(&link.social_media_url)
    .bind(link.profile_image_url())
    .bind(super::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, user_id: i64, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM social_medias WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
