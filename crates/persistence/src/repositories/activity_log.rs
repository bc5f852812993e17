//! Activity log repository for database operations.
//!
//! The table is append-only; there are no update or delete operations here.

use sqlx::PgPool;

use crate::entities::ActivityLogEntity;
use domain::models::CreateActivityLogInput;

const LOG_COLUMNS: &str =
    "id, user_id, user_email, action, resource, resource_id, details, created_at";

/// Repository for activity log database operations.
#[derive(Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Creates a new ActivityLogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a log entry.
    pub async fn insert(
        &self,
        input: CreateActivityLogInput,
    ) -> Result<ActivityLogEntity, sqlx::Error> {
        sqlx::query_as::<_, ActivityLogEntity>(&format!(
            r#"
            INSERT INTO activity_logs (user_id, user_email, action, resource, resource_id, details)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {LOG_COLUMNS}
            "#,
        ))
        .bind(input.user_id)
        .bind(input.user_email)
        .bind(input.action)
        .bind(input.resource)
        .bind(input.resource_id)
        .bind(input.details)
        .fetch_one(&self.pool)
        .await
    }

    /// List entries, newest first.
    pub async fn list(&self, limit: i64) -> Result<Vec<ActivityLogEntity>, sqlx::Error> {
        sqlx::query_as::<_, ActivityLogEntity>(&format!(
            r#"
            SELECT {LOG_COLUMNS}
            FROM activity_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Total and trailing-week counters for the dashboard.
    pub async fn counts(&self) -> Result<(i64, i64), sqlx::Error> {
        let row: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE created_at >= NOW() - INTERVAL '7 days')
            FROM activity_logs
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
