/**
 * Protected Routes
 *
 * Every route here requires `Authorization: Bearer <token>`. The auth
 * middleware is attached with `route_layer`, so unknown paths still reach
 * the fallback instead of answering 401.
 *
 * - `GET  /api/auth/me`
 * - `GET  /api/chats` / `POST /api/chats`
 * - `GET  /api/chats/{id}` / `PUT` / `DELETE`
 * - `GET  /api/chats/{id}/messages` / `POST`
 */

use axum::{middleware, routing::get, Router};

use crate::backend::auth::get_me;
use crate::backend::chat::handlers::{
    add_message, create_chat, delete_chat, get_chat, get_messages, list_chats, update_chat,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Build the router for authenticated endpoints
pub fn configure_chat_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/chats", get(list_chats).post(create_chat))
        .route(
            "/api/chats/{id}",
            get(get_chat).put(update_chat).delete(delete_chat),
        )
        .route(
            "/api/chats/{id}/messages",
            get(get_messages).post(add_message),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
