//! Contact message entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{ContactMessage, MessageReply};

/// Database row mapping for the messages table.
///
/// The reply is stored flattened into three nullable columns; the conversion
/// only surfaces it when the message text is present.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub is_replied: bool,
    pub reply_message: Option<String>,
    pub reply_sent_at: Option<DateTime<Utc>>,
    pub reply_sent_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for ContactMessage {
    fn from(entity: ContactMessageEntity) -> Self {
        let reply = match (entity.reply_message, entity.reply_sent_at, entity.reply_sent_by) {
            (Some(message), Some(sent_at), Some(sent_by)) => Some(MessageReply {
                message,
                sent_at,
                sent_by,
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            is_read: entity.is_read,
            is_replied: entity.is_replied,
            created_at: entity.created_at,
            reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(reply: bool) -> ContactMessageEntity {
        ContactMessageEntity {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            message: "Hello".to_string(),
            is_read: reply,
            is_replied: reply,
            reply_message: reply.then(|| "Thanks!".to_string()),
            reply_sent_at: reply.then(Utc::now),
            reply_sent_by: reply.then(|| "admin@appstore.example".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_reply_absent_when_columns_null() {
        let message: ContactMessage = entity(false).into();
        assert!(message.reply.is_none());
        assert!(!message.is_read);
        assert!(!message.is_replied);
    }

    #[test]
    fn test_reply_present_when_columns_set() {
        let message: ContactMessage = entity(true).into();
        let reply = message.reply.expect("reply should be mapped");
        assert_eq!(reply.message, "Thanks!");
        assert_eq!(reply.sent_by, "admin@appstore.example");
    }
}
