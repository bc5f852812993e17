//! About-page content entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use domain::i18n::LocalizedText;
use domain::models::AboutContent;

/// Database row mapping for the content table.
#[derive(Debug, Clone, FromRow)]
pub struct AboutContentEntity {
    pub id: String,
    pub title: Json<LocalizedText>,
    pub content: Json<LocalizedText>,
    pub images: Vec<String>,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<AboutContentEntity> for AboutContent {
    fn from(entity: AboutContentEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title.0,
            content: entity.content.0,
            images: entity.images,
            is_published: entity.is_published,
            updated_at: entity.updated_at,
        }
    }
}
