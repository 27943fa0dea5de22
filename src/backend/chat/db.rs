/**
 * Database Operations for Chat Threads and Messages
 *
 * Every function takes the owner's user ID and filters on it. A thread that
 * exists but belongs to someone else is indistinguishable from a missing
 * one: both come back as `None` / `false`.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};

use crate::shared::{Chat, ChatMessage, DEFAULT_CHAT_TITLE};

/// Maximum number of threads returned by [`list_chats`]
pub const CHAT_LIST_LIMIT: i64 = 100;

/// Row of the `chats` table
#[derive(Debug, Clone, FromRow)]
pub struct ChatRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatRecord {
    fn into_chat(self, messages: Vec<ChatMessage>) -> Chat {
        Chat {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            messages,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row of the `chat_messages` table
#[derive(Debug, Clone, FromRow)]
pub struct MessageRecord {
    pub chat_id: String,
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<MessageRecord> for ChatMessage {
    fn from(record: MessageRecord) -> Self {
        ChatMessage {
            role: record.role,
            content: record.content,
            timestamp: record.timestamp,
        }
    }
}

/// List the owner's threads, most recently updated first
///
/// At most [`CHAT_LIST_LIMIT`] threads, each with its messages.
pub async fn list_chats(pool: &SqlitePool, owner: &str) -> Result<Vec<Chat>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let records = sqlx::query_as::<_, ChatRecord>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM chats
        WHERE user_id = $1
        ORDER BY updated_at DESC, id
        LIMIT $2
        "#,
    )
    .bind(owner)
    .bind(CHAT_LIST_LIMIT)
    .fetch_all(&mut *tx)
    .await?;

    let messages = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT chat_id, role, content, timestamp
        FROM chat_messages
        WHERE chat_id IN (
            SELECT id FROM chats
            WHERE user_id = $1
            ORDER BY updated_at DESC, id
            LIMIT $2
        )
        ORDER BY seq
        "#,
    )
    .bind(owner)
    .bind(CHAT_LIST_LIMIT)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut by_chat: HashMap<String, Vec<ChatMessage>> = HashMap::new();
    for message in messages {
        by_chat
            .entry(message.chat_id.clone())
            .or_default()
            .push(message.into());
    }

    Ok(records
        .into_iter()
        .map(|record| {
            let messages = by_chat.remove(&record.id).unwrap_or_default();
            record.into_chat(messages)
        })
        .collect())
}

/// Create an empty thread
///
/// `title` defaults to [`DEFAULT_CHAT_TITLE`].
pub async fn create_chat(
    pool: &SqlitePool,
    owner: &str,
    title: Option<String>,
) -> Result<Chat, sqlx::Error> {
    let now = Utc::now();
    let record = ChatRecord {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: owner.to_string(),
        title: title.unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string()),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO chats (id, user_id, title, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&record.id)
    .bind(&record.user_id)
    .bind(&record.title)
    .bind(record.created_at)
    .bind(record.updated_at)
    .execute(pool)
    .await?;

    Ok(record.into_chat(Vec::new()))
}

/// Get one of the owner's threads with its messages
pub async fn get_chat(
    pool: &SqlitePool,
    owner: &str,
    chat_id: &str,
) -> Result<Option<Chat>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(record) = fetch_record(&mut tx, owner, chat_id).await? else {
        return Ok(None);
    };
    let messages = fetch_messages(&mut tx, chat_id).await?;

    tx.commit().await?;
    Ok(Some(record.into_chat(messages)))
}

/// Set the title (when given) and bump `updated_at`
///
/// # Returns
/// The updated thread, or `None` if the owner has no such thread
pub async fn update_chat_title(
    pool: &SqlitePool,
    owner: &str,
    chat_id: &str,
    title: Option<&str>,
) -> Result<Option<Chat>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let record = sqlx::query_as::<_, ChatRecord>(
        r#"
        UPDATE chats
        SET title = COALESCE($1, title), updated_at = $2
        WHERE id = $3 AND user_id = $4
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(Utc::now())
    .bind(chat_id)
    .bind(owner)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(record) = record else {
        return Ok(None);
    };
    let messages = fetch_messages(&mut tx, chat_id).await?;

    tx.commit().await?;
    Ok(Some(record.into_chat(messages)))
}

/// Delete a thread and all of its messages
///
/// # Returns
/// `true` if the owner had such a thread
pub async fn delete_chat(
    pool: &SqlitePool,
    owner: &str,
    chat_id: &str,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM chats WHERE id = $1 AND user_id = $2")
        .bind(chat_id)
        .bind(owner)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Ok(false);
    }

    sqlx::query("DELETE FROM chat_messages WHERE chat_id = $1")
        .bind(chat_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}

/// Append a message and bump the thread's `updated_at`
///
/// The ownership check and both writes share one transaction, so a message
/// never lands in a thread that was deleted or is owned by someone else.
///
/// # Returns
/// `true` if the owner had such a thread
pub async fn append_message(
    pool: &SqlitePool,
    owner: &str,
    chat_id: &str,
    role: &str,
    content: &str,
) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let touched = sqlx::query("UPDATE chats SET updated_at = $1 WHERE id = $2 AND user_id = $3")
        .bind(now)
        .bind(chat_id)
        .bind(owner)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if touched == 0 {
        return Ok(false);
    }

    sqlx::query(
        r#"
        INSERT INTO chat_messages (chat_id, role, content, timestamp)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(chat_id)
    .bind(role)
    .bind(content)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}

/// Messages of one of the owner's threads, in append order
pub async fn list_messages(
    pool: &SqlitePool,
    owner: &str,
    chat_id: &str,
) -> Result<Option<Vec<ChatMessage>>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if fetch_record(&mut tx, owner, chat_id).await?.is_none() {
        return Ok(None);
    }
    let messages = fetch_messages(&mut tx, chat_id).await?;

    tx.commit().await?;
    Ok(Some(messages))
}

async fn fetch_record(
    tx: &mut Transaction<'_, Sqlite>,
    owner: &str,
    chat_id: &str,
) -> Result<Option<ChatRecord>, sqlx::Error> {
    sqlx::query_as::<_, ChatRecord>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM chats
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(chat_id)
    .bind(owner)
    .fetch_optional(&mut **tx)
    .await
}

async fn fetch_messages(
    tx: &mut Transaction<'_, Sqlite>,
    chat_id: &str,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let records = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT chat_id, role, content, timestamp
        FROM chat_messages
        WHERE chat_id = $1
        ORDER BY seq
        "#,
    )
    .bind(chat_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(records.into_iter().map(ChatMessage::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const ALICE: &str = "user-alice";
    const BOB: &str = "user-bob";

    async fn pool() -> SqlitePool {
        connect_database("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_uses_default_title() {
        let pool = pool().await;

        let chat = create_chat(&pool, ALICE, None).await.unwrap();
        assert_eq!(chat.title, DEFAULT_CHAT_TITLE);
        assert_eq!(chat.user_id, ALICE);
        assert!(chat.messages.is_empty());
        assert_eq!(chat.created_at, chat.updated_at);

        let named = create_chat(&pool, ALICE, Some("Rezepte".to_string())).await.unwrap();
        assert_eq!(named.title, "Rezepte");
    }

    #[tokio::test]
    async fn test_thread_lifecycle() {
        let pool = pool().await;
        let chat = create_chat(&pool, ALICE, Some("Diskussion über KI-Entwicklung".to_string()))
            .await
            .unwrap();

        assert!(append_message(&pool, ALICE, &chat.id, "user", "Was ist KI?").await.unwrap());
        assert!(append_message(&pool, ALICE, &chat.id, "assistant", "Künstliche Intelligenz ...")
            .await
            .unwrap());

        let messages = list_messages(&pool, ALICE, &chat.id).await.unwrap().unwrap();
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "assistant"]);
        assert_eq!(messages[0].content, "Was ist KI?");

        let before = get_chat(&pool, ALICE, &chat.id).await.unwrap().unwrap();
        assert_eq!(before.messages, messages);
        assert!(before.updated_at >= chat.updated_at);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let renamed = update_chat_title(&pool, ALICE, &chat.id, Some("KI"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.title, "KI");
        assert!(renamed.updated_at > before.updated_at);
        assert_eq!(
            renamed.created_at.timestamp_millis(),
            chat.created_at.timestamp_millis()
        );
        assert_eq!(renamed.messages.len(), 2);

        assert!(delete_chat(&pool, ALICE, &chat.id).await.unwrap());
        assert!(get_chat(&pool, ALICE, &chat.id).await.unwrap().is_none());

        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chat_messages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_update_without_title_only_bumps_timestamp() {
        let pool = pool().await;
        let chat = create_chat(&pool, ALICE, Some("Bleibt".to_string())).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = update_chat_title(&pool, ALICE, &chat.id, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Bleibt");
        assert!(updated.updated_at > chat.updated_at);
    }

    #[tokio::test]
    async fn test_foreign_threads_are_invisible() {
        let pool = pool().await;
        let chat = create_chat(&pool, ALICE, None).await.unwrap();
        append_message(&pool, ALICE, &chat.id, "user", "privat").await.unwrap();

        assert!(get_chat(&pool, BOB, &chat.id).await.unwrap().is_none());
        assert!(update_chat_title(&pool, BOB, &chat.id, Some("mine")).await.unwrap().is_none());
        assert!(!append_message(&pool, BOB, &chat.id, "user", "hi").await.unwrap());
        assert!(list_messages(&pool, BOB, &chat.id).await.unwrap().is_none());
        assert!(!delete_chat(&pool, BOB, &chat.id).await.unwrap());
        assert!(list_chats(&pool, BOB).await.unwrap().is_empty());

        let untouched = get_chat(&pool, ALICE, &chat.id).await.unwrap().unwrap();
        assert_eq!(untouched.title, DEFAULT_CHAT_TITLE);
        assert_eq!(untouched.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_thread() {
        let pool = pool().await;

        assert!(get_chat(&pool, ALICE, "missing").await.unwrap().is_none());
        assert!(!append_message(&pool, ALICE, "missing", "user", "hi").await.unwrap());
        assert!(!delete_chat(&pool, ALICE, "missing").await.unwrap());

        let messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chat_messages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(messages, 0);
    }

    #[tokio::test]
    async fn test_list_orders_by_recent_activity() {
        let pool = pool().await;
        let first = create_chat(&pool, ALICE, Some("first".to_string())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = create_chat(&pool, ALICE, Some("second".to_string())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        append_message(&pool, ALICE, &first.id, "user", "bump").await.unwrap();

        let chats = list_chats(&pool, ALICE).await.unwrap();
        let titles: Vec<&str> = chats.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(chats[0].messages.len(), 1);
        assert!(chats[1].messages.is_empty());
        assert_eq!(chats[1].id, second.id);
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let pool = pool().await;
        for i in 0..(CHAT_LIST_LIMIT + 5) {
            create_chat(&pool, ALICE, Some(format!("chat {i}"))).await.unwrap();
        }

        let chats = list_chats(&pool, ALICE).await.unwrap();
        assert_eq!(chats.len() as i64, CHAT_LIST_LIMIT);
    }
}
