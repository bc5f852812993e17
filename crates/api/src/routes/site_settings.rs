//! Site settings routes: the public maintenance status and the admin
//! settings surface, including the maintenance toggle.

use axum::{
    extract::{Extension, State},
    http::HeaderMap,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::routes::i18n::resolve_locale;
use crate::services::record_activity;
use domain::i18n::LocalizedText;
use domain::models::{SeoMeta, SiteSettings, SocialLinks, Theme};
use domain::services::{ActivityBuilder, CountdownSnapshot};
use persistence::repositories::SiteSettingsRepository;

/// Maintenance window length when the admin enables the mode without
/// choosing an end time.
const DEFAULT_MAINTENANCE_HOURS: i64 = 3;

/// Public maintenance status, with the message resolved for the request's
/// locale and a countdown snapshot while a window is running.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatusResponse {
    pub maintenance_mode: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<CountdownSnapshot>,
}

/// GET /api/v1/maintenance
pub async fn get_maintenance_status(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Json<MaintenanceStatusResponse>, ApiError> {
    let settings = SiteSettingsRepository::new(state.pool.clone())
        .get_or_default()
        .await?;

    let locale = resolve_locale(&jar, &headers, &state.config.site.default_locale);
    let message = settings.maintenance_message.resolve(&locale).to_string();

    let countdown = match (settings.maintenance_mode, settings.maintenance_end) {
        (true, Some(end)) => {
            let now = Utc::now();
            let start = settings.maintenance_start.unwrap_or(now);
            Some(CountdownSnapshot::compute(start, end, now))
        }
        _ => None,
    };

    Ok(Json(MaintenanceStatusResponse {
        maintenance_mode: settings.maintenance_mode,
        message,
        maintenance_start: settings.maintenance_start,
        maintenance_end: settings.maintenance_end,
        countdown,
    }))
}

/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SiteSettings>, ApiError> {
    let settings = SiteSettingsRepository::new(state.pool.clone())
        .get_or_default()
        .await?;
    Ok(Json(settings))
}

/// Request body for updating settings; omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub theme: Option<String>,
    pub maintenance_message: Option<LocalizedText>,
    pub social_links: Option<SocialLinks>,
    pub seo_meta: Option<SeoMeta>,
}

impl UpdateSettingsRequest {
    /// Merge the request onto the current settings, validating each provided
    /// field before any write happens.
    fn apply_to(self, mut settings: SiteSettings) -> Result<SiteSettings, ApiError> {
        if let Some(site_name) = self.site_name {
            if site_name.is_empty() {
                return Err(ApiError::Validation("Site name cannot be empty".into()));
            }
            settings.site_name = site_name;
        }
        if let Some(description) = self.site_description {
            settings.site_description = description;
        }
        if let Some(logo_url) = self.logo_url {
            settings.logo_url = logo_url;
        }
        if let Some(favicon_url) = self.favicon_url {
            settings.favicon_url = favicon_url;
        }
        if let Some(color) = self.primary_color {
            shared::validation::validate_hex_color(&color)
                .map_err(|e| ApiError::Validation(message_of(e)))?;
            settings.primary_color = color;
        }
        if let Some(color) = self.secondary_color {
            shared::validation::validate_hex_color(&color)
                .map_err(|e| ApiError::Validation(message_of(e)))?;
            settings.secondary_color = color;
        }
        if let Some(theme) = self.theme {
            settings.theme = Theme::from_str(&theme)
                .map_err(|_| ApiError::Validation("Theme must be 'light' or 'dark'".into()))?;
        }
        if let Some(message) = self.maintenance_message {
            settings.maintenance_message = message;
        }
        if let Some(social_links) = self.social_links {
            settings.social_links = social_links;
        }
        if let Some(seo_meta) = self.seo_meta {
            settings.seo_meta = seo_meta;
        }
        Ok(settings)
    }
}

fn message_of(e: validator::ValidationError) -> String {
    e.message
        .map(|m| m.to_string())
        .unwrap_or_else(|| "invalid value".to_string())
}

/// PUT /api/v1/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SiteSettings>, ApiError> {
    let repo = SiteSettingsRepository::new(state.pool.clone());

    let current = repo.get_or_default().await?;
    let merged = request.apply_to(current)?;
    let settings: SiteSettings = repo.upsert(&merged).await?.into();

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "update_site_settings")
            .on_resource("site_settings", settings.id.to_string())
            .with_details("Updated site settings".to_string())
            .build(),
    );

    Ok(Json(settings))
}

/// Request body for the maintenance toggle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleMaintenanceRequest {
    pub enabled: bool,
    /// When enabling: admin-chosen end of the window. Defaults to three
    /// hours from now.
    pub maintenance_end: Option<DateTime<Utc>>,
    /// Optional replacement for the maintenance message.
    pub message: Option<LocalizedText>,
}

/// POST /api/v1/admin/settings/maintenance
///
/// Enabling stamps the window start with the current time and sets the end;
/// disabling clears both. With no settings row yet, the defaults (light
/// theme, empty social links and SEO) are written merged with the
/// maintenance fields.
pub async fn toggle_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Json(request): Json<ToggleMaintenanceRequest>,
) -> Result<Json<SiteSettings>, ApiError> {
    let repo = SiteSettingsRepository::new(state.pool.clone());
    let mut settings = repo.get_or_default().await?;

    let now = Utc::now();
    if request.enabled {
        let end = request
            .maintenance_end
            .unwrap_or_else(|| now + Duration::hours(DEFAULT_MAINTENANCE_HOURS));
        if end <= now {
            return Err(ApiError::Validation(
                "Maintenance end must be in the future".into(),
            ));
        }
        settings.maintenance_mode = true;
        settings.maintenance_start = Some(now);
        settings.maintenance_end = Some(end);
    } else {
        settings.maintenance_mode = false;
        settings.maintenance_start = None;
        settings.maintenance_end = None;
    }

    if let Some(message) = request.message {
        if !message.is_empty() {
            settings.maintenance_message = message;
        }
    }

    let settings: SiteSettings = repo.upsert(&settings).await?.into();

    info!(enabled = request.enabled, "Maintenance mode toggled");

    let action = if request.enabled {
        "enable_maintenance"
    } else {
        "disable_maintenance"
    };
    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, action)
            .on_resource_type("maintenance")
            .with_details(format!(
                "Maintenance mode {}",
                if request.enabled { "enabled" } else { "disabled" }
            ))
            .build(),
    );

    Ok(Json(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let request = UpdateSettingsRequest {
            site_name: Some("My Store".to_string()),
            theme: Some("dark".to_string()),
            ..UpdateSettingsRequest::default()
        };
        let merged = request.apply_to(SiteSettings::with_defaults()).unwrap();
        assert_eq!(merged.site_name, "My Store");
        assert_eq!(merged.theme, Theme::Dark);
        // Untouched fields keep their defaults.
        assert_eq!(merged.primary_color, "#3b82f6");
    }

    #[test]
    fn test_apply_rejects_bad_color() {
        let request = UpdateSettingsRequest {
            primary_color: Some("blue".to_string()),
            ..UpdateSettingsRequest::default()
        };
        assert!(request.apply_to(SiteSettings::with_defaults()).is_err());
    }

    #[test]
    fn test_apply_rejects_unknown_theme() {
        let request = UpdateSettingsRequest {
            theme: Some("sepia".to_string()),
            ..UpdateSettingsRequest::default()
        };
        assert!(request.apply_to(SiteSettings::with_defaults()).is_err());
    }

    #[test]
    fn test_apply_rejects_empty_site_name() {
        let request = UpdateSettingsRequest {
            site_name: Some(String::new()),
            ..UpdateSettingsRequest::default()
        };
        assert!(request.apply_to(SiteSettings::with_defaults()).is_err());
    }

    #[test]
    fn test_toggle_request_deserialization() {
        let request: ToggleMaintenanceRequest =
            serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(request.enabled);
        assert!(request.maintenance_end.is_none());
        assert!(request.message.is_none());
    }
}
