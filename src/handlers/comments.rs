use axum::extract::State;

use super::{Envelope, Message};
use crate::{
    auth::CurrentAccount,
    db,
    error::AppError,
    extract::{AppJson, AppPath},
    models::comment::{CommentCreated, CommentListing, CommentUpdated, NewComment, UpdateComment},
    AppState,
};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<CommentListing>>, AppError> {
    Ok(Envelope::ok(db::comments::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppJson(payload): AppJson<NewComment>,
) -> Result<Envelope<CommentCreated>, AppError> {
    payload.validate()?;
    if db::photos::find_by_id(&state.db, payload.photo_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("photo".into()));
    }

    let comment =
        db::comments::create(&state.db, caller.id(), payload.photo_id, payload.message.trim())
            .await?;
    Ok(Envelope::created(comment.into()))
}

pub async fn update(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateComment>,
) -> Result<Envelope<CommentUpdated>, AppError> {
    payload.validate()?;
    ensure_owner(&state, &caller, id).await?;

    let comment = db::comments::update(&state.db, caller.id(), id, payload.message.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("comment".into()))?;
    Ok(Envelope::ok(comment.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppPath(id): AppPath<i64>,
) -> Result<Envelope<Message>, AppError> {
    ensure_owner(&state, &caller, id).await?;

    db::comments::delete(&state.db, caller.id(), id).await?;
    Ok(Envelope::ok(Message::new(
        "Your comment has been successfully deleted",
    )))
}

async fn ensure_owner(state: &AppState, caller: &CurrentAccount, id: i64) -> Result<(), AppError> {
    let comment = db::comments::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("comment".into()))?;
    if comment.user_id != caller.id() {
        tracing::warn!(comment_id = id, caller = caller.id(), "comment owned by another account");
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
