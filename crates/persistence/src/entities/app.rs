//! App catalogue entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the apps table.
#[derive(Debug, Clone, FromRow)]
pub struct AppEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub version: String,
    pub download_url: String,
    pub image_url: String,
    pub icon_url: String,
    pub category: String,
    pub downloads: i64,
    pub rating: f64,
    pub size_label: String,
    pub screenshots: Vec<String>,
    pub features: Vec<String>,
    pub requirements: Vec<String>,
    pub is_active: bool,
    pub last_updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AppEntity> for domain::models::App {
    fn from(entity: AppEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            short_description: entity.short_description,
            version: entity.version,
            download_url: entity.download_url,
            image_url: entity.image_url,
            icon_url: entity.icon_url,
            category: entity.category,
            downloads: entity.downloads,
            rating: entity.rating,
            size_label: entity.size_label,
            screenshots: entity.screenshots,
            features: entity.features,
            requirements: entity.requirements,
            is_active: entity.is_active,
            last_updated_at: entity.last_updated_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
