use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Owner summary shown next to each photo in listings.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PhotoOwner {
    pub email: String,
    pub username: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PhotoListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub photo: Photo,
    #[sqlx(flatten)]
    pub user: PhotoOwner,
}

#[derive(Debug, Deserialize)]
pub struct PhotoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub photo_url: String,
}

impl PhotoPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".into()));
        }
        if self.photo_url.trim().is_empty() {
            return Err(AppError::BadRequest("photo_url is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PhotoCreated {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
}

impl From<Photo> for PhotoCreated {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            title: p.title,
            caption: p.caption,
            photo_url: p.photo_url,
            user_id: p.user_id,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhotoUpdated {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i64,
    pub updated_at: NaiveDateTime,
}

impl From<Photo> for PhotoUpdated {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            title: p.title,
            caption: p.caption,
            photo_url: p.photo_url,
            user_id: p.user_id,
            updated_at: p.updated_at,
        }
    }
}
