/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container. It is built once
 * at startup and never mutated afterwards:
 * - The SQLite connection pool (all mutable data lives in the store)
 * - The token service holding the signing secret
 * - The verification mailer
 * - The loaded configuration
 *
 * # State Extraction
 *
 * Handlers that only touch the store extract the pool directly via
 * `FromRef`, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::mail::Mailer;
use crate::backend::server::config::AppConfig;

/// Shared application state
///
/// Cloning is cheap: every field is a pool handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Session credential issuer and verifier
    pub tokens: Arc<TokenService>,

    /// Verification mail delivery
    pub mailer: Arc<dyn Mailer>,

    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
