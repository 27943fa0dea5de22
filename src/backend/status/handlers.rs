//! Status HTTP Handlers
//!
//! Public endpoints: the API root greeting and the status check records.

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use super::db::{self, StatusCheck, StatusCheckCreate};
use crate::backend::error::BackendError;
use crate::shared::MessageResponse;

/// GET /api/
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

/// GET /api/status
pub async fn list_status_checks(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<StatusCheck>>, BackendError> {
    Ok(Json(db::list_status_checks(&pool).await?))
}

/// POST /api/status
pub async fn create_status_check(
    State(pool): State<SqlitePool>,
    Json(request): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, BackendError> {
    let check = db::create_status_check(&pool, &request.client_name).await?;
    tracing::debug!("Status check recorded for {}", check.client_name);
    Ok(Json(check))
}
