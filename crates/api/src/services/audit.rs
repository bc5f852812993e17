//! Fire-and-forget activity log dispatch.
//!
//! Every admin mutation appends one entry after its primary write succeeds.
//! The append runs on its own task: the caller never waits for it, and a
//! failure is recorded on the diagnostic channel only, never surfaced to the
//! user as the mutation's failure.

use sqlx::PgPool;
use tracing::warn;

use domain::models::CreateActivityLogInput;
use persistence::repositories::ActivityLogRepository;

/// Append an activity log entry without blocking the calling handler.
pub fn record_activity(pool: &PgPool, input: CreateActivityLogInput) {
    let pool = pool.clone();
    tokio::spawn(async move {
        let repo = ActivityLogRepository::new(pool);
        let action = input.action.clone();
        if let Err(e) = repo.insert(input).await {
            warn!(action = %action, error = %e, "Failed to record activity log entry");
        }
    });
}
