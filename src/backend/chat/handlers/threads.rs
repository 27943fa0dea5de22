/**
 * Chat Thread Handlers
 *
 * CRUD endpoints for the authenticated user's chat threads:
 *
 * - GET    /api/chats       - list threads (most recent first, max 100)
 * - POST   /api/chats       - create a thread
 * - GET    /api/chats/{id}  - get one thread
 * - PUT    /api/chats/{id}  - rename a thread
 * - DELETE /api/chats/{id}  - delete a thread with its messages
 *
 * Threads of other users answer 404, exactly like missing ones.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::chat::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{Chat, CreateChatRequest, MessageResponse, UpdateChatRequest};

pub(crate) const CHAT_NOT_FOUND: &str = "Chat not found";

/// List the caller's threads
pub async fn list_chats(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Chat>>, BackendError> {
    let chats = db::list_chats(&pool, &user.id).await?;
    Ok(Json(chats))
}

/// Create a thread
///
/// The body may be empty or omit `title`; the default title is used then.
pub async fn create_chat(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    request: Option<Json<CreateChatRequest>>,
) -> Result<Json<Chat>, BackendError> {
    let title = request.and_then(|Json(request)| request.title);
    let chat = db::create_chat(&pool, &user.id, title).await?;

    tracing::info!("User {} created chat {}", user.id, chat.id);
    Ok(Json(chat))
}

/// Get one thread with its messages
pub async fn get_chat(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(chat_id): Path<String>,
) -> Result<Json<Chat>, BackendError> {
    db::get_chat(&pool, &user.id, &chat_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(CHAT_NOT_FOUND))
}

/// Rename a thread
///
/// `updated_at` is bumped even when no title is given.
pub async fn update_chat(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(chat_id): Path<String>,
    request: Option<Json<UpdateChatRequest>>,
) -> Result<Json<Chat>, BackendError> {
    let title = request.and_then(|Json(request)| request.title);

    let chat = db::update_chat_title(&pool, &user.id, &chat_id, title.as_deref())
        .await?
        .ok_or_else(|| BackendError::not_found(CHAT_NOT_FOUND))?;

    tracing::info!("User {} updated chat {}", user.id, chat.id);
    Ok(Json(chat))
}

/// Delete a thread
pub async fn delete_chat(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(chat_id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    if !db::delete_chat(&pool, &user.id, &chat_id).await? {
        return Err(BackendError::not_found(CHAT_NOT_FOUND));
    }

    tracing::info!("User {} deleted chat {}", user.id, chat_id);
    Ok(Json(MessageResponse::new("Chat deleted successfully")))
}
