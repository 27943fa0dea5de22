/**
 * Login Handler
 *
 * This module implements the handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * The identity provider has already authenticated the user in the browser;
 * this endpoint trusts the submitted identity.
 *
 * 1. Look up the user by identity provider ID
 * 2. Create it (unverified) and mail a verification code if it is new
 * 3. Generate a JWT token
 * 4. Return token and user info
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::flow::login_user;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed email
/// * `500 Internal Server Error` - store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "google_id": "108234",
///   "email": "user@example.com",
///   "name": "Ermin",
///   "picture": "https://example.com/avatar.png"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "email": "user@example.com",
///     "name": "Ermin",
///     "picture": "https://example.com/avatar.png",
///     "verified": false
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let (user, token) = login_user(
        &state.db_pool,
        &state.tokens,
        state.mailer.as_ref(),
        request,
    )
    .await?;

    Ok(Json(AuthResponse::bearer(token, &user)))
}
