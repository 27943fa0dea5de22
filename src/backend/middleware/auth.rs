/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token from the
 * Authorization header, resolves its subject to a stored user and attaches
 * that user to the request extensions.
 *
 * Every failure (missing header, bad token, unknown subject) becomes the
 * same 401 response.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::{AuthError, BackendError};
use crate::backend::server::state::AppState;

/// Extract the raw token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingCredential)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}

/// Resolve a raw credential to the user it was issued for
///
/// # Errors
///
/// * `Auth(InvalidCredential)` - bad signature, malformed or expired
/// * `Auth(UnknownSubject)` - the token's user no longer exists
/// * `Database` - store failure
pub async fn authenticate(
    pool: &SqlitePool,
    tokens: &TokenService,
    raw: &str,
) -> Result<User, BackendError> {
    let user_id = tokens.verify(raw)?;

    get_user_by_id(pool, &user_id).await?.ok_or_else(|| {
        tracing::warn!("Token subject not found: {}", user_id);
        BackendError::from(AuthError::UnknownSubject)
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token (401 before any store access if absent)
/// 2. Verifies the token and loads its user
/// 3. Attaches the `User` to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).map_err(|e| {
        tracing::warn!("Rejected request to {}: {}", request.uri().path(), e);
        e
    })?;

    let user = authenticate(&app_state.db_pool, &app_state.tokens, token).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("User not found in request extensions");
                BackendError::from(AuthError::MissingCredential)
            })
    }
}
