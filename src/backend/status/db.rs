/**
 * Status Check Records
 *
 * Clients post a liveness record with their name; the list endpoint
 * returns what has been recorded. Records are not scoped to a user.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Maximum number of records returned by [`list_status_checks`]
pub const STATUS_LIST_LIMIT: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Store a new record
pub async fn create_status_check(
    pool: &SqlitePool,
    client_name: &str,
) -> Result<StatusCheck, sqlx::Error> {
    let check = StatusCheck {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: client_name.to_string(),
        timestamp: Utc::now(),
    };

    sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)")
        .bind(&check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(pool)
        .await?;

    Ok(check)
}

/// Oldest records first, at most [`STATUS_LIST_LIMIT`]
pub async fn list_status_checks(pool: &SqlitePool) -> Result<Vec<StatusCheck>, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>(
        r#"
        SELECT id, client_name, timestamp
        FROM status_checks
        ORDER BY timestamp, rowid
        LIMIT $1
        "#,
    )
    .bind(STATUS_LIST_LIMIT)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;

    #[tokio::test]
    async fn test_create_then_list() {
        let pool = connect_database("sqlite::memory:").await.unwrap();

        let first = create_status_check(&pool, "frontend").await.unwrap();
        let second = create_status_check(&pool, "monitor").await.unwrap();
        assert_ne!(first.id, second.id);

        let checks = list_status_checks(&pool).await.unwrap();
        let names: Vec<&str> = checks.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["frontend", "monitor"]);
        assert_eq!(checks[0].id, first.id);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        assert!(list_status_checks(&pool).await.unwrap().is_empty());
    }
}
