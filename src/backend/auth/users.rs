/**
 * User Model and Database Operations
 *
 * Users are created on their first OAuth login and only ever mutated by
 * email verification. Nothing in this module deletes them.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Internal user ID (UUID string), the subject of session tokens
    pub id: String,
    /// Identity provider's user ID (unique, never changes)
    pub external_id: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub picture: Option<String>,
    /// User email address
    pub email: String,
    /// Whether the email address has been confirmed
    pub verified: bool,
    /// Pending verification code; present only while `verified` is false
    #[serde(skip_serializing)]
    pub verification_code: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a user unless one with the same external ID already exists
///
/// # Returns
/// `true` if this call created the row, `false` if the external ID was taken
pub async fn insert_user_if_absent(pool: &SqlitePool, user: &User) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, external_id, name, picture, email, verified, verification_code, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (external_id) DO NOTHING
        "#,
    )
    .bind(&user.id)
    .bind(&user.external_id)
    .bind(&user.name)
    .bind(&user.picture)
    .bind(&user.email)
    .bind(user.verified)
    .bind(&user.verification_code)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, external_id, name, picture, email, verified, verification_code, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by identity provider ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_external_id(
    pool: &SqlitePool,
    external_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, external_id, name, picture, email, verified, verification_code, created_at
        FROM users
        WHERE external_id = $1
        "#,
    )
    .bind(external_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Mark the user holding `code` as verified and clear the code
///
/// The match and the update happen in one statement, so a code can be
/// consumed at most once.
///
/// # Returns
/// `true` if a user held the code
pub async fn consume_verification_code(pool: &SqlitePool, code: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET verified = TRUE, verification_code = NULL
        WHERE verification_code = $1
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
