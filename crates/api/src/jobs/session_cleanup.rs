//! Expired session sweep.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::jobs::scheduler::{Job, JobFrequency};
use persistence::repositories::UserRepository;

/// Hourly job that removes expired session rows.
pub struct SessionCleanupJob {
    pool: PgPool,
}

impl SessionCleanupJob {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Job for SessionCleanupJob {
    fn name(&self) -> &'static str {
        "session_cleanup"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Minutes(60)
    }

    async fn execute(&self) -> Result<(), String> {
        let removed = UserRepository::new(self.pool.clone())
            .delete_expired_sessions(Utc::now())
            .await
            .map_err(|e| format!("Failed to sweep sessions: {}", e))?;

        if removed > 0 {
            info!(removed, "Expired sessions removed");
        }
        Ok(())
    }
}
