use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SocialMedia {
    pub id: i64,
    pub name: String,
    pub social_media_url: String,
    pub profile_image_url: Option<String>,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SocialMediaOwner {
    #[sqlx(rename = "owner_id")]
    pub id: i64,
    #[sqlx(rename = "owner_username")]
    pub username: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SocialMediaListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub social_media: SocialMedia,
    #[sqlx(flatten)]
    pub user: SocialMediaOwner,
}

#[derive(Debug, Deserialize)]
pub struct SocialMediaPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub social_media_url: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl SocialMediaPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        if self.social_media_url.trim().is_empty() {
            return Err(AppError::BadRequest("social_media_url is required".into()));
        }
        Ok(())
    }

    /// Blank image urls are stored as absent.
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct SocialMediaCreated {
    pub id: i64,
    pub name: String,
    pub social_media_url: String,
    pub profile_image_url: Option<String>,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
}

impl From<SocialMedia> for SocialMediaCreated {
    fn from(s: SocialMedia) -> Self {
        Self {
            id: s.id,
            name: s.name,
            social_media_url: s.social_media_url,
            profile_image_url: s.profile_image_url,
            user_id: s.user_id,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SocialMediaUpdated {
    pub id: i64,
    pub name: String,
    pub social_media_url: String,
    pub profile_image_url: Option<String>,
    pub user_id: i64,
    pub updated_at: NaiveDateTime,
}

impl From<SocialMedia> for SocialMediaUpdated {
    fn from(s: SocialMedia) -> Self {
        Self {
            id: s.id,
            name: s.name,
            social_media_url: s.social_media_url,
            profile_image_url: s.profile_image_url,
            user_id: s.user_id,
            updated_at: s.updated_at,
        }
    }
}
