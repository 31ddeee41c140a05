//! Session-token issuing and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Issued tokens are valid for 30 days; there is no revocation, so a token
/// outlives even a password change for its full lifetime.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: i64,
    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

/// Trait for session-token operations
pub trait TokenService: Send + Sync + Debug {
    /// Issue a signed token for a user
    fn issue(&self, user_id: i64) -> Result<String, DomainError>;

    /// Verify a token and return the user id it was issued to.
    ///
    /// Bad signature, expiry, and malformed structure all collapse into one
    /// credential error with an identical message, so callers cannot probe
    /// which check failed.
    fn verify(&self, token: &str) -> Result<i64, DomainError>;
}

/// HS256 token service backed by a symmetric secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a token service signing with the given secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenService for JwtService {
    fn issue(&self, user_id: i64) -> Result<String, DomainError> {
        let claims = Claims::new(user_id);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<i64, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.sub)
            .map_err(|_| DomainError::credential("invalid token"))
    }
}
