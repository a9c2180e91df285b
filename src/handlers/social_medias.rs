use axum::extract::State;

use super::{Envelope, Message};
use crate::{
    auth::CurrentAccount,
    db,
    error::AppError,
    extract::{AppJson, AppPath},
    models::social_media::{
        SocialMediaCreated, SocialMediaListing, SocialMediaPayload, SocialMediaUpdated,
    },
    AppState,
};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<SocialMediaListing>>, AppError> {
    Ok(Envelope::ok(db::social_medias::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppJson(payload): AppJson<SocialMediaPayload>,
) -> Result<Envelope<SocialMediaCreated>, AppError> {
    payload.validate()?;
    let link = db::social_medias::create(&state.db, caller.id(), &payload).await?;
    Ok(Envelope::created(link.into()))
}

pub async fn update(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<SocialMediaPayload>,
) -> Result<Envelope<SocialMediaUpdated>, AppError> {
    payload.validate()?;
    ensure_owner(&state, &caller, id).await?;

    let link = db::social_medias::update(&state.db, caller.id(), id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("social media".into()))?;
    Ok(Envelope::ok(link.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
) -> Result<Envelope<Message>, AppError> {
    ensure_owner(&state, &caller, id).await?;

    db::social_medias::delete(&state.db, caller.id(), id).await?;
    Ok(Envelope::ok(Message::new(
        "Your social media has been successfully deleted",
    )))
}

async fn ensure_owner(state: &AppState, caller: &CurrentAccount, id: i64) -> Result<(), AppError> {
    let link = db::social_medias::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("social media".into()))?;
    if link.user_id != caller.id() {
        tracing::warn!(
            social_media_id = id,
            caller = caller.id(),
            "social media link owned by another account"
        );
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
