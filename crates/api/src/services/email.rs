//! Email relay for contact-form submissions.
//!
//! Supports two providers:
//! - `console`: logs the email (development)
//! - `http`: posts the email as JSON to a relay API
//!
//! Sending is fire-and-forget from the caller's point of view: the message is
//! already saved when the relay runs, and a relay failure only produces a
//! diagnostic log line.

use crate::config::EmailConfig;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during email operations.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Email message to be sent.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_text: String,
    /// Reply-To, so support can answer the visitor directly.
    pub reply_to: Option<String>,
}

/// Email service for forwarding messages to the support mailbox.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
    client: reqwest::Client,
}

impl EmailService {
    /// Creates a new EmailService with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }

    /// Send an email message.
    pub async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Email service disabled, skipping send"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message),
            "http" => self.send_http(message).await,
            provider => {
                error!(provider = %provider, "Unknown email provider");
                Err(EmailError::NotConfigured)
            }
        }
    }

    /// Forward a contact-form submission to the support mailbox.
    pub async fn send_contact_notification(
        &self,
        from_name: &str,
        from_email: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let message = EmailMessage {
            to: self.config.support_email.clone(),
            subject: format!("New contact message from {}", from_name),
            body_text: format!(
                "Name: {name}\nEmail: {email}\n\n{body}",
                name = from_name,
                email = from_email,
                body = body
            ),
            reply_to: Some(from_email.to_string()),
        };

        self.send(message).await
    }

    fn send_console(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            to = %message.to,
            subject = %message.subject,
            from = %self.config.sender_email,
            reply_to = ?message.reply_to,
            body = %message.body_text,
            "Email (console provider)"
        );
        Ok(())
    }

    async fn send_http(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.api_url.is_empty() {
            return Err(EmailError::NotConfigured);
        }

        let payload = json!({
            "from": {
                "email": self.config.sender_email,
                "name": self.config.sender_name,
            },
            "to": message.to,
            "reply_to": message.reply_to,
            "subject": message.subject,
            "text": message.body_text,
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EmailError::ProviderError(format!(
                "Relay returned {}",
                response.status()
            )));
        }

        info!(to = %message.to, "Email relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, provider: &str) -> EmailConfig {
        EmailConfig {
            enabled,
            provider: provider.to_string(),
            ..EmailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_disabled_service_skips_send() {
        let service = EmailService::new(config(false, "http"));
        let result = service
            .send_contact_notification("Ali", "ali@example.com", "Hello")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_console_provider_succeeds() {
        let service = EmailService::new(config(true, "console"));
        let result = service
            .send_contact_notification("Ali", "ali@example.com", "Hello")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_provider_fails() {
        let service = EmailService::new(config(true, "carrier-pigeon"));
        let result = service
            .send_contact_notification("Ali", "ali@example.com", "Hello")
            .await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_http_provider_requires_url() {
        let service = EmailService::new(config(true, "http"));
        let result = service
            .send_contact_notification("Ali", "ali@example.com", "Hello")
            .await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }
}
