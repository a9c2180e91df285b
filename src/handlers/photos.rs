use axum::extract::State;

use super::{Envelope, Message};
use crate::{
    auth::CurrentAccount,
    db,
    error::AppError,
    extract::{AppJson, AppPath},
    models::photo::{PhotoCreated, PhotoListing, PhotoPayload, PhotoUpdated},
    AppState,
};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<PhotoListing>>, AppError> {
    Ok(Envelope::ok(db::photos::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppJson(payload): AppJson<PhotoPayload>,
) -> Result<Envelope<PhotoCreated>, AppError> {
    payload.validate()?;
    let photo = db::photos::create(&state.db, caller.id(), &payload).await?;
    Ok(Envelope::created(photo.into()))
}

pub async fn update(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<PhotoPayload>,
) -> Result<Envelope<PhotoUpdated>, AppError> {
    payload.validate()?;
    ensure_owner(&state, &caller, id).await?;

    let photo = db::photos::update(&state.db, caller.id(), id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("photo".into()))?;
    Ok(Envelope::ok(photo.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
) -> Result<Envelope<Message>, AppError> {
    ensure_owner(&state, &caller, id).await?;

    db::photos::delete(&state.db, caller.id(), id).await?;
    Ok(Envelope::ok(Message::new(
        "Your photo has been successfully deleted",
    )))
}

async fn ensure_owner(state: &AppState, caller: &CurrentAccount, id: i64) -> Result<(), AppError> {
    let photo = db::photos::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("photo".into()))?;
    if photo.user_id != caller.id() {
        tracing::warn!(photo_id = id, caller = caller.id(), "photo owned by another account");
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
