//! Activity log domain models.
//!
//! The log is append-only: entries are created as a side effect of admin
//! mutations and never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded admin (or system) action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub action: String,
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

/// Input for appending a log entry.
#[derive(Debug, Clone)]
pub struct CreateActivityLogInput {
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let log = ActivityLog {
            id: Uuid::new_v4(),
            user_id: None,
            user_email: None,
            action: "disable_maintenance".to_string(),
            resource: "maintenance".to_string(),
            resource_id: None,
            details: "Maintenance window elapsed".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&log).unwrap();
        assert!(!json.contains("userId"));
        assert!(!json.contains("resourceId"));
        assert!(json.contains("\"action\":\"disable_maintenance\""));
    }
}
