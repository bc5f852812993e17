//! Activity log entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the activity_logs table.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogEntity {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLogEntity> for domain::models::ActivityLog {
    fn from(entity: ActivityLogEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_email: entity.user_email,
            action: entity.action,
            resource: entity.resource,
            resource_id: entity.resource_id,
            details: entity.details,
            created_at: entity.created_at,
        }
    }
}
