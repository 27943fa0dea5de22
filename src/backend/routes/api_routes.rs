/**
 * Public API Routes
 *
 * Routes that need no credential:
 *
 * - `GET  /api/` - greeting
 * - `GET  /api/status` / `POST /api/status` - status check records
 * - `POST /api/auth/login` - identity-provider login
 * - `POST /api/auth/verify-email` - consume a verification code
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, verify_email};
use crate::backend::server::state::AppState;
use crate::backend::status::{create_status_check, list_status_checks, root};

/// Add the public API routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api", get(root))
        .route("/api/", get(root))
        .route(
            "/api/status",
            get(list_status_checks).post(create_status_check),
        )
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify-email", post(verify_email))
}
