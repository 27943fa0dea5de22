/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the authenticated user without the verification
 * code. The route sits behind the auth middleware, which has already
 * resolved the bearer token to a stored user.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "user@example.com",
///   "name": "Ermin",
///   "picture": null,
///   "verified": true
/// }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
