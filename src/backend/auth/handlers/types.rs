/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the login, verify-email and me
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Login request
///
/// Sent by the frontend after the identity provider has authenticated the
/// user. Field aliases accept both the Google-specific and the generic names.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    /// Identity provider's user ID
    #[serde(alias = "external_id", alias = "externalId")]
    pub google_id: String,
    /// User's email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(default, alias = "avatar")]
    pub picture: Option<String>,
}

/// Auth response
///
/// Returned by login. Contains the JWT token and the user's public fields.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (30-day expiration)
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: &User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user: UserResponse::from(user),
        }
    }
}

/// User response (without the verification code)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub verified: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
            verified: user.verified,
        }
    }
}

/// Query string of `POST /api/auth/verify-email`
#[derive(Deserialize, Debug, Default)]
pub struct VerifyEmailQuery {
    #[serde(default, alias = "code")]
    pub token: Option<String>,
}
