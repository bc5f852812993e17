//! About-page content routes.

use axum::{
    extract::{Extension, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::services::record_activity;
use domain::i18n::LocalizedText;
use domain::models::AboutContent;
use domain::services::ActivityBuilder;
use persistence::repositories::AboutContentRepository;

/// GET /api/v1/content/about
///
/// Serves the stored document when present and published; otherwise the
/// bundled default. A failed read also degrades to the default rather than
/// erroring the public page.
pub async fn get_about_content(State(state): State<AppState>) -> Json<AboutContent> {
    let stored = match AboutContentRepository::new(state.pool.clone()).get().await {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, "About content read failed, serving default");
            None
        }
    };

    let content = stored
        .map(AboutContent::from)
        .filter(|content| content.is_published)
        .unwrap_or_else(AboutContent::default_content);

    Json(content)
}

/// Request body for writing the about document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAboutRequest {
    pub title: LocalizedText,
    pub content: LocalizedText,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

/// PUT /api/v1/admin/content/about
pub async fn update_about_content(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Json(request): Json<UpdateAboutRequest>,
) -> Result<Json<AboutContent>, ApiError> {
    if request.title.is_empty() || request.content.is_empty() {
        return Err(ApiError::Validation(
            "Title and content require at least one locale".to_string(),
        ));
    }

    let content: AboutContent = AboutContentRepository::new(state.pool.clone())
        .upsert(
            &request.title,
            &request.content,
            &request.images,
            request.is_published,
        )
        .await?
        .into();

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "update_about_content")
            .on_resource("content", content.id.clone())
            .with_details("Updated about page content".to_string())
            .build(),
    );

    Ok(Json(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_defaults_published() {
        let request: UpdateAboutRequest = serde_json::from_str(
            r#"{"title": {"en": "About"}, "content": {"en": "Body"}}"#,
        )
        .unwrap();
        assert!(request.is_published);
        assert!(request.images.is_empty());
        assert_eq!(request.title.resolve("en"), "About");
    }

    #[test]
    fn test_update_request_reads_locale_maps() {
        let request: UpdateAboutRequest = serde_json::from_str(
            r#"{"title": {"ar": "حولنا", "en": "About"}, "content": {"en": "Body"}, "isPublished": false}"#,
        )
        .unwrap();
        assert!(!request.is_published);
        assert_eq!(request.title.resolve("ar"), "حولنا");
        // Missing locale falls back to English.
        assert_eq!(request.content.resolve("fr"), "Body");
    }
}
