//! Issuance and verification of the signed bearer tokens handed out at login.
//!
//! Tokens are HS256 JWTs whose claims carry `iat` and `exp` in epoch
//! milliseconds and the account id as `uid`. The token is the whole session:
//! nothing is persisted server side.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only algorithm the service signs with or accepts.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

pub const DEFAULT_TTL_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued-at (milliseconds since epoch)
    pub iat: i64,
    /// Expiry (milliseconds since epoch)
    pub exp: i64,
    /// Account id of the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
}

impl Claims {
    pub fn subject(&self) -> Result<i64, TokenError> {
        self.uid.ok_or(TokenError::MissingSubject)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    SignatureMismatch,
    #[error("token was signed with an unexpected algorithm")]
    AlgorithmMismatch,
    #[error("token has expired")]
    Expired,
    #[error("token carries no subject")]
    MissingSubject,
    #[error("failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    /// Machine-readable reason surfaced to clients.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Malformed => "token_malformed",
            Self::SignatureMismatch => "invalid_signature",
            Self::AlgorithmMismatch => "algorithm_mismatch",
            Self::Expired => "token_expired",
            Self::MissingSubject => "missing_subject",
            Self::Encode(_) => "token_encoding_failed",
        }
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign a token for `subject`, valid from `now` for the configured TTL.
    pub fn issue(&self, subject: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp_millis();
        let claims = Claims {
            iat,
            exp: iat + self.ttl.num_milliseconds(),
            uid: Some(subject),
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature, algorithm and expiry as of `now`.
    ///
    /// `iat` is not checked: a token presented before its issued-at time is
    /// accepted as long as everything else holds.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        // `exp` is in milliseconds, which jsonwebtoken would read as seconds,
        // so expiry is checked by hand below.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp_millis() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
