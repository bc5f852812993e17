//! Contact message repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactMessageEntity;

const MESSAGE_COLUMNS: &str = r#"id, name, email, message, is_read, is_replied,
       reply_message, reply_sent_at, reply_sent_by, created_at"#;

/// Repository for contact message database operations.
#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Creates a new ContactMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a visitor submission. New messages start unread and unreplied.
    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessageEntity, sqlx::Error> {
        sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING {MESSAGE_COLUMNS}
            "#,
        ))
        .bind(name)
        .bind(email)
        .bind(message)
        .fetch_one(&self.pool)
        .await
    }

    /// List messages, newest first.
    pub async fn list(&self, limit: i64) -> Result<Vec<ContactMessageEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Find a message by ID.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessageEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Mark a message as read.
    pub async fn mark_read(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessageEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            UPDATE messages
            SET is_read = true
            WHERE id = $1
            RETURNING {MESSAGE_COLUMNS}
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Attach a reply. Replying also marks the message read.
    pub async fn reply(
        &self,
        id: Uuid,
        reply_message: &str,
        sent_by: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<Option<ContactMessageEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            UPDATE messages
            SET is_read = true,
                is_replied = true,
                reply_message = $1,
                reply_sent_by = $2,
                reply_sent_at = $3
            WHERE id = $4
            RETURNING {MESSAGE_COLUMNS}
            "#,
        ))
        .bind(reply_message)
        .bind(sent_by)
        .bind(sent_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Total and unread counters for the dashboard.
    pub async fn counts(&self) -> Result<(i64, i64), sqlx::Error> {
        let row: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE is_read = false)
            FROM messages
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
