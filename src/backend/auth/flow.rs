/**
 * Login and Verification Flows
 *
 * The HTTP-independent part of the auth endpoints.
 *
 * # Login
 *
 * 1. Look up the user by identity provider ID
 * 2. If absent, create it unverified with a fresh verification code and
 *    mail the code (best-effort)
 * 3. Issue a session token for the user's internal ID
 *
 * Stored users are returned unchanged: name, email and picture from later
 * logins are ignored.
 *
 * # Verification
 *
 * A code is consumed by a single filtered update, so it works exactly once.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{
    consume_verification_code, get_user_by_external_id, insert_user_if_absent, User,
};
use crate::backend::auth::verification::generate_verification_code;
use crate::backend::error::BackendError;
use crate::backend::mail::Mailer;
use crate::shared::error::validate_email;

/// Resolve or create the user for a login and issue a session token
///
/// # Errors
///
/// * `SharedError` - email is malformed
/// * `Database` / `Token` - store or signing failure (no retry)
pub async fn login_user(
    pool: &SqlitePool,
    tokens: &TokenService,
    mailer: &dyn Mailer,
    request: LoginRequest,
) -> Result<(User, String), BackendError> {
    validate_email(&request.email)?;

    let user = match get_user_by_external_id(pool, &request.google_id).await? {
        Some(existing) => {
            tracing::info!("Existing user logged in: {}", existing.id);
            existing
        }
        None => register_user(pool, mailer, request).await?,
    };

    let token = tokens.issue(&user.id)?;
    Ok((user, token))
}

async fn register_user(
    pool: &SqlitePool,
    mailer: &dyn Mailer,
    request: LoginRequest,
) -> Result<User, BackendError> {
    let code = generate_verification_code();
    let candidate = User {
        id: uuid::Uuid::new_v4().to_string(),
        external_id: request.google_id,
        name: request.name,
        picture: request.picture,
        email: request.email,
        verified: false,
        verification_code: Some(code.clone()),
        created_at: Utc::now(),
    };

    if insert_user_if_absent(pool, &candidate).await? {
        tracing::info!("Created user {} ({})", candidate.id, candidate.email);
        if let Err(e) = mailer.send_verification(&candidate.email, &code).await {
            tracing::warn!("Failed to send verification email to {}: {}", candidate.email, e);
        }
        return Ok(candidate);
    }

    // A concurrent first login for the same external ID won the insert
    tracing::info!("User for external ID {} created concurrently", candidate.external_id);
    get_user_by_external_id(pool, &candidate.external_id)
        .await?
        .ok_or_else(|| BackendError::internal("user missing after conflicting insert"))
}

/// Consume a verification code
///
/// # Errors
///
/// * `InvalidInput` - code is blank or matches no user (already used,
///   mistyped, or never issued)
pub async fn verify_email(pool: &SqlitePool, code: &str) -> Result<(), BackendError> {
    if code.trim().is_empty() {
        return Err(BackendError::invalid_input("Invalid verification token"));
    }

    if consume_verification_code(pool, code).await? {
        tracing::info!("Email verified");
        Ok(())
    } else {
        tracing::warn!("Verification attempted with unknown code");
        Err(BackendError::invalid_input("Invalid verification token"))
    }
}
