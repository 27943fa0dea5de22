/**
 * Chat Message Handlers
 *
 * - POST /api/chats/{id}/messages - append a message
 * - GET  /api/chats/{id}/messages - list messages in append order
 *
 * Roles are stored as given; the backend never generates messages itself.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::chat::db;
use crate::backend::chat::handlers::threads::CHAT_NOT_FOUND;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{AddMessageRequest, MessageResponse, MessagesResponse};

/// Append a message to one of the caller's threads
pub async fn add_message(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(chat_id): Path<String>,
    Json(request): Json<AddMessageRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let appended =
        db::append_message(&pool, &user.id, &chat_id, &request.role, &request.content).await?;
    if !appended {
        return Err(BackendError::not_found(CHAT_NOT_FOUND));
    }

    tracing::info!("Message ({}) added to chat {}", request.role, chat_id);
    Ok(Json(MessageResponse::new("Message added successfully")))
}

/// List the messages of one of the caller's threads
pub async fn get_messages(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(chat_id): Path<String>,
) -> Result<Json<MessagesResponse>, BackendError> {
    let messages = db::list_messages(&pool, &user.id, &chat_id)
        .await?
        .ok_or_else(|| BackendError::not_found(CHAT_NOT_FOUND))?;

    Ok(Json(MessagesResponse { messages }))
}
