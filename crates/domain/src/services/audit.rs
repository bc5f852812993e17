//! Activity log builder.
//!
//! Gives route handlers a fluent way to describe the entry they want
//! appended. The append itself is dispatched fire-and-forget by the caller;
//! a logging failure never affects the mutation that triggered it.

use uuid::Uuid;

use crate::models::CreateActivityLogInput;

/// Builder for activity log entries.
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    user_id: Option<Uuid>,
    user_email: Option<String>,
    action: String,
    resource: String,
    resource_id: Option<String>,
    details: String,
}

impl ActivityBuilder {
    /// Entry for an action performed by an authenticated admin.
    pub fn admin_action(
        user_id: Uuid,
        user_email: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            user_email: Some(user_email.into()),
            action: action.into(),
            resource: String::new(),
            resource_id: None,
            details: String::new(),
        }
    }

    /// Entry for an action the system performed on its own (e.g. the
    /// maintenance watcher closing an elapsed window).
    pub fn system_action(action: impl Into<String>) -> Self {
        Self {
            user_id: None,
            user_email: None,
            action: action.into(),
            resource: String::new(),
            resource_id: None,
            details: String::new(),
        }
    }

    /// Set the resource being acted upon.
    pub fn on_resource(mut self, resource: impl Into<String>, id: impl Into<String>) -> Self {
        self.resource = resource.into();
        self.resource_id = Some(id.into());
        self
    }

    /// Set just the resource type (when no ID is available).
    pub fn on_resource_type(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Set the human-readable detail string.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn build(self) -> CreateActivityLogInput {
        CreateActivityLogInput {
            user_id: self.user_id,
            user_email: self.user_email,
            action: self.action,
            resource: self.resource,
            resource_id: self.resource_id,
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_action_entry() {
        let user_id = Uuid::new_v4();
        let input = ActivityBuilder::admin_action(user_id, "admin@appstore.example", "update_app")
            .on_resource("app", "abc-123")
            .with_details("Updated version to 2.1.0")
            .build();

        assert_eq!(input.user_id, Some(user_id));
        assert_eq!(input.user_email.as_deref(), Some("admin@appstore.example"));
        assert_eq!(input.action, "update_app");
        assert_eq!(input.resource, "app");
        assert_eq!(input.resource_id.as_deref(), Some("abc-123"));
        assert_eq!(input.details, "Updated version to 2.1.0");
    }

    #[test]
    fn test_system_action_has_no_actor() {
        let input = ActivityBuilder::system_action("disable_maintenance")
            .on_resource_type("maintenance")
            .with_details("Maintenance window elapsed")
            .build();

        assert!(input.user_id.is_none());
        assert!(input.user_email.is_none());
        assert!(input.resource_id.is_none());
        assert_eq!(input.resource, "maintenance");
    }
}
