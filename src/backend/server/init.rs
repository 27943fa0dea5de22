/**
 * Server Initialization
 *
 * Builds the application state from a loaded configuration:
 * 1. Open the store and run migrations
 * 2. Create the token service from the signing secret
 * 3. Pick the verification mailer (SMTP or log-only)
 *
 * A store that cannot be opened is fatal. Mail misconfiguration is not:
 * the server falls back to logging verification codes.
 */

use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::mail::build_mailer;
use crate::backend::server::config::{connect_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create the application state
///
/// # Errors
///
/// * `Database` - the store is unreachable or migrations failed
pub async fn build_state(config: AppConfig) -> Result<AppState, BackendError> {
    tracing::info!("Initializing Ermin chat backend");

    let db_pool = connect_database(&config.database_url()).await?;
    let tokens = Arc::new(TokenService::new(&config.jwt_secret));
    let mailer = build_mailer(config.smtp.as_ref());

    Ok(AppState {
        db_pool,
        tokens,
        mailer,
        config: Arc::new(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::DEV_JWT_SECRET;

    fn memory_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            database_name: "chat_history".to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            cors_origins: vec!["*".to_string()],
            smtp: None,
            port: 8001,
        }
    }

    #[tokio::test]
    async fn test_build_state_runs_migrations() {
        let state = build_state(memory_config()).await.unwrap();

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&state.db_pool)
                .await
                .unwrap();
        for table in ["chat_messages", "chats", "status_checks", "users"] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn test_build_state_fails_on_unreachable_store() {
        let mut config = memory_config();
        config.database_url = "sqlite:///nonexistent-dir/ermin/chat.db".to_string();

        assert!(build_state(config).await.is_err());
    }
}
