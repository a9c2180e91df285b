//! Request authentication gate.
//!
//! Runs in front of every routed handler. Public entry points pass straight
//! through; everything else must present `Authorization: Bearer <token>`,
//! the token must verify, and its subject must resolve to a live account.
//! The account is then attached to the request extensions as
//! [`CurrentAccount`] for the handler to read.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::current::CurrentAccount;
use super::lookup::{AccountLookup, LookupError};
use super::token::TokenService;
use crate::error::AppError;
use crate::models::user::User;

pub const BEARER_PREFIX: &str = "Bearer ";

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// How a request path is compared against the public allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicMatch {
    /// Public if the path contains an entry anywhere.
    #[default]
    Substring,
    /// Public only if the path equals an entry.
    Exact,
}

impl std::str::FromStr for PublicMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            other => Err(format!("unknown public path match mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPaths {
    paths: Vec<String>,
    mode: PublicMatch,
}

impl Default for PublicPaths {
    fn default() -> Self {
        Self::new(["/login", "/register"], PublicMatch::Substring)
    }
}

impl PublicPaths {
    pub fn new<I, P>(paths: I, mode: PublicMatch) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(Into::into)
                .filter(|p| !p.is_empty())
                .collect(),
            mode,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        match self.mode {
            PublicMatch::Substring => self.paths.iter().any(|p| path.contains(p.as_str())),
            PublicMatch::Exact => self.paths.iter().any(|p| path == p),
        }
    }
}

/// Everything the gate needs, shared read-only across requests.
#[derive(Clone)]
pub struct Gate {
    pub tokens: Arc<TokenService>,
    pub accounts: Arc<dyn AccountLookup>,
    pub public_paths: PublicPaths,
    pub lookup_timeout: Duration,
}

impl Gate {
    pub fn new(tokens: Arc<TokenService>, accounts: Arc<dyn AccountLookup>) -> Self {
        Self {
            tokens,
            accounts,
            public_paths: PublicPaths::default(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_public_paths(mut self, public_paths: PublicPaths) -> Self {
        self.public_paths = public_paths;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Verify `token` and resolve its subject to an account.
    pub async fn authenticate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::warn!(reason = e.reason(), "authentication failed: {}", e);
            AppError::Token(e)
        })?;

        let subject = claims.subject().map_err(|e| {
            tracing::warn!(reason = e.reason(), "authentication failed: {}", e);
            AppError::Token(e)
        })?;

        let lookup = self.accounts.get_account_by_id(subject);
        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(account)) => Ok(account),
            Ok(Err(LookupError::NotFound)) => {
                tracing::warn!(subject, "authentication failed: account not found");
                Err(AppError::Forbidden("account_not_found"))
            }
            Ok(Err(LookupError::Transient(e))) => {
                tracing::error!(subject, "account lookup failed: {}", e);
                Err(AppError::Internal("lookup_failed"))
            }
            Err(_) => {
                tracing::error!(
                    subject,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "account lookup timed out"
                );
                Err(AppError::Internal("lookup_timeout"))
            }
        }
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>` with a single non-empty
/// token segment.
pub fn bearer_token(value: Option<&HeaderValue>) -> Result<&str, AppError> {
    let value = value.ok_or(AppError::Forbidden("missing_authorization"))?;

    let value = value
        .to_str()
        .map_err(|_| AppError::Forbidden("invalid_authorization"))?;
    if value.is_empty() {
        return Err(AppError::Forbidden("missing_authorization"));
    }

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AppError::Forbidden("invalid_authorization_scheme"))?;
    if token.is_empty() {
        return Err(AppError::Forbidden("empty_bearer_token"));
    }
    if token.contains(char::is_whitespace) {
        return Err(AppError::Forbidden("invalid_authorization_scheme"));
    }

    Ok(token)
}

pub async fn authenticate(State(gate): State<Gate>, mut request: Request, next: Next) -> Response {
    if gate.public_paths.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let token = match bearer_token(request.headers().get(header::AUTHORIZATION)) {
        Ok(token) => token.to_owned(),
        Err(e) => {
            tracing::warn!(path = %request.uri().path(), "authentication failed: {}", e);
            return e.into_response();
        }
    };

    match gate.authenticate_token(&token).await {
        Ok(account) => {
            tracing::debug!(account_id = account.id, "request authenticated");
            request.extensions_mut().insert(CurrentAccount(account));
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
