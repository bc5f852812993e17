//! Contact message domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message submitted through the public contact form.
///
/// Created by visitors; the read/reply flags are mutated only by an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub is_replied: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<MessageReply>,
}

/// An admin's reply to a contact message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReply {
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub sent_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    #[test]
    fn test_new_message_is_unread_and_unreplied() {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: Name().fake(),
            email: SafeEmail().fake(),
            message: "Hello".to_string(),
            is_read: false,
            is_replied: false,
            created_at: Utc::now(),
            reply: None,
        };
        assert!(!message.is_read);
        assert!(!message.is_replied);
        assert!(message.reply.is_none());
    }

    #[test]
    fn test_reply_omitted_from_json_when_absent() {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            message: "Hello".to_string(),
            is_read: false,
            is_replied: false,
            created_at: Utc::now(),
            reply: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("\"reply\""));
        assert!(json.contains("\"isRead\":false"));
        assert!(json.contains("\"isReplied\":false"));
    }

    #[test]
    fn test_reply_serialized_when_present() {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            message: "Hello".to_string(),
            is_read: true,
            is_replied: true,
            created_at: Utc::now(),
            reply: Some(MessageReply {
                message: "Thanks for reaching out".to_string(),
                sent_at: Utc::now(),
                sent_by: "admin@appstore.example".to_string(),
            }),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"sentBy\":\"admin@appstore.example\""));
    }
}
