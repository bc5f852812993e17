//! Contact message routes: public submission and admin management.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::services::record_activity;
use domain::models::ContactMessage;
use domain::services::ActivityBuilder;
use persistence::repositories::ContactMessageRepository;

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 200;

/// Request body for a contact-form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

/// POST /api/v1/messages
///
/// Saves the submission, then forwards it to the support mailbox on a
/// separate task. Relay failure never fails the submission.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    request.validate()?;

    let message: ContactMessage = ContactMessageRepository::new(state.pool.clone())
        .insert(&request.name, &request.email, &request.message)
        .await?
        .into();

    info!(message_id = %message.id, "Contact message received");

    let email_service = state.email.clone();
    let (from_name, from_email, body) = (request.name, request.email, request.message);
    tokio::spawn(async move {
        if let Err(e) = email_service
            .send_contact_notification(&from_name, &from_email, &body)
            .await
        {
            warn!(error = %e, "Failed to relay contact message to support mailbox");
        }
    });

    Ok((StatusCode::CREATED, Json(message)))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let messages = ContactMessageRepository::new(state.pool.clone())
        .list(limit)
        .await?
        .into_iter()
        .map(ContactMessage::from)
        .collect();
    Ok(Json(messages))
}

/// PUT /api/v1/admin/messages/:id/read
pub async fn mark_message_read(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactMessage>, ApiError> {
    let message: ContactMessage = ContactMessageRepository::new(state.pool.clone())
        .mark_read(id)
        .await?
        .map(ContactMessage::from)
        .ok_or_else(|| ApiError::NotFound("Message not found".to_string()))?;

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "read_message")
            .on_resource("message", message.id.to_string())
            .with_details(format!("Marked message from {} as read", message.name))
            .build(),
    );

    Ok(Json(message))
}

/// Request body for replying to a message.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    #[validate(length(min = 1, max = 5000, message = "Reply message is required"))]
    pub message: String,
}

/// POST /api/v1/admin/messages/:id/reply
pub async fn reply_to_message(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReplyRequest>,
) -> Result<Json<ContactMessage>, ApiError> {
    request.validate()?;

    let repo = ContactMessageRepository::new(state.pool.clone());
    let message: ContactMessage = repo
        .reply(id, &request.message, &auth.email, chrono::Utc::now())
        .await?
        .map(ContactMessage::from)
        .ok_or_else(|| ApiError::NotFound("Message not found".to_string()))?;

    // The reply itself goes out through the relay, addressed to the visitor.
    let email_service = state.email.clone();
    let (to, site_name, body) = (
        message.email.clone(),
        state.config.site.name.clone(),
        request.message.clone(),
    );
    tokio::spawn(async move {
        let outbound = crate::services::EmailMessage {
            to,
            subject: format!("Re: your message to {}", site_name),
            body_text: body,
            reply_to: None,
        };
        if let Err(e) = email_service.send(outbound).await {
            warn!(error = %e, "Failed to relay reply email");
        }
    });

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "reply_message")
            .on_resource("message", message.id.to_string())
            .with_details(format!("Replied to message from {}", message.name))
            .build(),
    );

    Ok(Json(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_valid() {
        let request = SubmitMessageRequest {
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_submit_request_rejects_empty_fields() {
        for (name, email, message) in [
            ("", "ali@example.com", "Hello"),
            ("Ali", "", "Hello"),
            ("Ali", "ali@example.com", ""),
        ] {
            let request = SubmitMessageRequest {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            };
            assert!(request.validate().is_err(), "expected rejection");
        }
    }

    #[test]
    fn test_submit_request_rejects_malformed_email() {
        let request = SubmitMessageRequest {
            name: "Ali".to_string(),
            email: "ali-at-example".to_string(),
            message: "Hello".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_reply_request_rejects_empty_message() {
        let request = ReplyRequest {
            message: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
