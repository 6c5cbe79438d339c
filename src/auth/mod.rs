pub mod ownership;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use ownership::{require_ownership, OwnedResource};

/// Longest token lifetime accepted from config or the CLI (one year)
pub const MAX_EXPIRY_HOURS: u64 = 24 * 365;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Result<Self, TokenError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(lifetime(expiry_hours)?)
            .ok_or(TokenError::InvalidExpiry(expiry_hours))?;

        Ok(Self {
            user_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

/// Token lifetime as a duration, rejecting zero and anything past
/// [`MAX_EXPIRY_HOURS`]
pub fn lifetime(hours: u64) -> Result<Duration, TokenError> {
    if hours == 0 || hours > MAX_EXPIRY_HOURS {
        return Err(TokenError::InvalidExpiry(hours));
    }

    i64::try_from(hours)
        .ok()
        .and_then(Duration::try_hours)
        .ok_or(TokenError::InvalidExpiry(hours))
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("Token lifetime must be between 1 and {} hours, got {0}", MAX_EXPIRY_HOURS)]
    InvalidExpiry(u64),

    #[error("JWT generation error: {0}")]
    Generation(jsonwebtoken::errors::Error),

    #[error("Invalid JWT token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// HS256 signing and verification keys derived from `JWT_SECRET`.
///
/// Verification is what the request path uses; signing exists for the
/// `token` CLI command and for tests.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: u64,
}

impl TokenKeys {
    pub fn from_secret(secret: &str, expiry_hours: u64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }
        lifetime(expiry_hours)?;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        })
    }

    /// Sign a token for `user_id` using the configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.sign(&Claims::new(user_id, self.expiry_hours)?)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Generation)
    }

    /// Validate signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").field("expiry_hours", &self.expiry_hours).finish_non_exhaustive()
    }
}
