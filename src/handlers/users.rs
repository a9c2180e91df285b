use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::extract::State;

use super::{Envelope, Message};
use crate::{
    auth::CurrentAccount,
    db,
    error::AppError,
    extract::{AppJson, AppQuery},
    models::user::{
        AuthResponse, LoginPayload, RegisterResponse, RegisterUser, UpdateUser, UpdateUserQuery,
        UpdateUserResponse,
    },
    AppState,
};

pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUser>,
) -> Result<Envelope<RegisterResponse>, AppError> {
    payload.validate()?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)?
        .to_string();

    let user = db::users::create(
        &state.db,
        payload.username.trim(),
        payload.email.trim(),
        &password_hash,
        payload.age,
    )
    .await?;

    tracing::info!(user_id = user.id, "account registered");
    Ok(Envelope::created(user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginPayload>,
) -> Result<Envelope<AuthResponse>, AppError> {
    let user = db::users::find_by_email(&state.db, payload.email.trim())
        .await?
        .ok_or(AppError::LoginFail)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::LoginFail)?;

    let token = state.tokens.issue(user.id, chrono::Utc::now())?;

    tracing::debug!(user_id = user.id, "token issued");
    Ok(Envelope::ok(AuthResponse { token }))
}

pub async fn update(
    State(state): State<AppState>,
    caller: CurrentAccount,
    AppQuery(query): AppQuery<UpdateUserQuery>,
    AppJson(payload): AppJson<UpdateUser>,
) -> Result<Envelope<UpdateUserResponse>, AppError> {
    if query.user_id != caller.id() {
        return Err(AppError::BadRequest("wrong ID".into()));
    }
    payload.validate()?;

    let user = db::users::update(
        &state.db,
        caller.id(),
        payload.email.trim(),
        payload.username.trim(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("user".into()))?;

    Ok(Envelope::ok(user.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: CurrentAccount,
) -> Result<Envelope<Message>, AppError> {
    db::users::delete_with_content(&state.db, caller.id()).await?;

    tracing::info!(user_id = caller.id(), "account deleted");
    Ok(Envelope::ok(Message::new(
        "Your account has been successfully deleted",
    )))
}
