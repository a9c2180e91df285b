use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub photo_id: i64,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CommentAuthor {
    #[sqlx(rename = "author_id")]
    pub id: i64,
    #[sqlx(rename = "author_email")]
    pub email: String,
    #[sqlx(rename = "author_username")]
    pub username: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CommentPhoto {
    #[sqlx(rename = "photo_ref_id")]
    pub id: i64,
    #[sqlx(rename = "photo_title")]
    pub title: String,
    #[sqlx(rename = "photo_caption")]
    pub caption: String,
    #[sqlx(rename = "photo_url")]
    pub photo_url: String,
    #[sqlx(rename = "photo_owner_id")]
    pub user_id: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CommentListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub comment: Comment,
    #[sqlx(flatten)]
    pub user: CommentAuthor,
    #[sqlx(flatten)]
    pub photo: CommentPhoto,
}

#[derive(Debug, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub photo_id: i64,
    #[serde(default)]
    pub message: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.photo_id <= 0 {
            return Err(AppError::BadRequest("photo_id is required".into()));
        }
        validate_message(&self.message)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    #[serde(default)]
    pub message: String,
}

impl UpdateComment {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_message(&self.message)
    }
}

fn validate_message(message: &str) -> Result<(), AppError> {
    if message.trim().is_empty() {
        return Err(AppError::BadRequest("message is required".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CommentCreated {
    pub id: i64,
    pub user_id: i64,
    pub photo_id: i64,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl From<Comment> for CommentCreated {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            photo_id: c.photo_id,
            message: c.message,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentUpdated {
    pub id: i64,
    pub user_id: i64,
    pub photo_id: i64,
    pub message: String,
    pub updated_at: NaiveDateTime,
}

impl From<Comment> for CommentUpdated {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            photo_id: c.photo_id,
            message: c.message,
            updated_at: c.updated_at,
        }
    }
}
