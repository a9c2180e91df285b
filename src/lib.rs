//! Photo sharing backend: accounts, photos, comments and social media
//! links behind a bearer-token authentication gate.
//!
//! Every routed request passes through [`auth::authenticate`] before its
//! handler runs. `/login` and `/register` are public; everything else needs
//! `Authorization: Bearer <token>` where the token was issued by
//! `POST /users/login`.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod rest;
pub mod validation;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::auth::{authenticate, AccountLookup, Gate, TokenService};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub gate: Gate,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        let tokens = Arc::new(TokenService::new(
            config.jwt_secret.as_bytes(),
            chrono::Duration::seconds(config.token_ttl_secs),
        ));
        let accounts: Arc<dyn AccountLookup> = Arc::new(db::SqliteAccounts::new(db.clone()));
        let gate = Gate::new(tokens.clone(), accounts)
            .with_public_paths(config.public_paths.clone())
            .with_lookup_timeout(config.lookup_timeout);

        Self { db, tokens, gate }
    }
}

/// Full router: resource routes behind the gate, wrapped in request tracing.
pub fn app(state: AppState) -> Router {
    rest::router()
        .route_layer(from_fn_with_state(state.gate.clone(), authenticate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
