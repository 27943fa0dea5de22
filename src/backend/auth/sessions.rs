/**
 * Session Management and JWT Tokens
 *
 * Session credentials are HS256 JWTs carrying the user ID (`sub`) and an
 * expiry (`exp`). They are stateless: a token stays valid for its whole
 * lifetime unless the signing secret changes. There is no revocation list.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::AuthError;

/// Lifetime of a session credential
pub const SESSION_TTL_DAYS: i64 = 30;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Issues and verifies session credentials with one process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with `secret` and the default 30-day lifetime
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl: Duration::days(SESSION_TTL_DAYS),
        }
    }

    /// Create a JWT token for a user
    pub fn issue(&self, user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    /// Create a JWT token with an explicit lifetime
    pub fn issue_with_ttl(
        &self,
        user_id: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let exp = (Utc::now() + ttl).timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: u64::try_from(exp).unwrap_or(0),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token and return its subject
    ///
    /// Bad signatures, malformed input and expired tokens all come back as
    /// [`AuthError::InvalidCredential`]. Expiry uses the library's default
    /// leeway of 60 seconds.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                AuthError::InvalidCredential
            })
    }
}
