/**
 * Email Verification Handler
 *
 * POST /api/auth/verify-email?token=<code>
 *
 * Marks the user holding the code as verified. The code is single-use.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::flow::verify_email as consume;
use crate::backend::auth::handlers::types::VerifyEmailQuery;
use crate::backend::error::BackendError;
use crate::shared::MessageResponse;

/// Verify email handler
///
/// # Errors
///
/// * `400 Bad Request` - code missing, unknown or already used
pub async fn verify_email(
    State(pool): State<SqlitePool>,
    Query(query): Query<VerifyEmailQuery>,
) -> Result<Json<MessageResponse>, BackendError> {
    let code = query.token.unwrap_or_default();
    consume(&pool, &code).await?;

    Ok(Json(MessageResponse::new("Email verified successfully")))
}
