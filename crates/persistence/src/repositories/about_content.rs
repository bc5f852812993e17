//! About-page content repository for database operations.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::entities::AboutContentEntity;
use domain::i18n::LocalizedText;

const ABOUT_ID: &str = "about";
const CONTENT_COLUMNS: &str = "id, title, content, images, is_published, updated_at";

/// Repository for localized page content.
#[derive(Clone)]
pub struct AboutContentRepository {
    pool: PgPool,
}

impl AboutContentRepository {
    /// Creates a new AboutContentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the about document if one has been stored.
    pub async fn get(&self) -> Result<Option<AboutContentEntity>, sqlx::Error> {
        sqlx::query_as::<_, AboutContentEntity>(&format!(
            r#"
            SELECT {CONTENT_COLUMNS}
            FROM content
            WHERE id = $1
            "#,
        ))
        .bind(ABOUT_ID)
        .fetch_optional(&self.pool)
        .await
    }

    /// Write the about document, creating it on first use.
    pub async fn upsert(
        &self,
        title: &LocalizedText,
        content: &LocalizedText,
        images: &[String],
        is_published: bool,
    ) -> Result<AboutContentEntity, sqlx::Error> {
        sqlx::query_as::<_, AboutContentEntity>(&format!(
            r#"
            INSERT INTO content (id, title, content, images, is_published, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (id) DO UPDATE
            SET title        = EXCLUDED.title,
                content      = EXCLUDED.content,
                images       = EXCLUDED.images,
                is_published = EXCLUDED.is_published,
                updated_at   = NOW()
            RETURNING {CONTENT_COLUMNS}
            "#,
        ))
        .bind(ABOUT_ID)
        .bind(Json(title))
        .bind(Json(content))
        .bind(images)
        .bind(is_published)
        .fetch_one(&self.pool)
        .await
    }
}
