/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers return
 * them directly. Error responses are JSON:
 *
 * ```json
 * {
 *   "error": "Chat not found",
 *   "status": 404
 * }
 * ```
 *
 * Server errors are logged here with their full description; the body only
 * carries the generic message.
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::types::{AuthError, INTERNAL_ERROR_MESSAGE};
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = BackendError::not_found("Chat not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Chat not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_internal_response_hides_details() {
        let response = BackendError::internal("disk I/O error on users table").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_auth_response() {
        let response = BackendError::from(AuthError::InvalidCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
