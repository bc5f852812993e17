//! Site settings entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use domain::i18n::LocalizedText;
use domain::models::{SeoMeta, SiteSettings, SocialLinks, Theme};

/// Database row mapping for the site_settings table.
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingsEntity {
    pub id: Uuid,
    pub site_name: String,
    pub site_description: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub theme: String,
    pub maintenance_mode: bool,
    pub maintenance_start: Option<DateTime<Utc>>,
    pub maintenance_end: Option<DateTime<Utc>>,
    pub maintenance_message: Json<LocalizedText>,
    pub social_links: Json<SocialLinks>,
    pub seo_meta: Json<SeoMeta>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettingsEntity> for SiteSettings {
    fn from(entity: SiteSettingsEntity) -> Self {
        Self {
            id: entity.id,
            site_name: entity.site_name,
            site_description: entity.site_description,
            logo_url: entity.logo_url,
            favicon_url: entity.favicon_url,
            primary_color: entity.primary_color,
            secondary_color: entity.secondary_color,
            theme: Theme::from_str(&entity.theme).unwrap_or(Theme::Light),
            maintenance_mode: entity.maintenance_mode,
            maintenance_start: entity.maintenance_start,
            maintenance_end: entity.maintenance_end,
            maintenance_message: entity.maintenance_message.0,
            social_links: entity.social_links.0,
            seo_meta: entity.seo_meta.0,
            updated_at: entity.updated_at,
        }
    }
}
