//! App catalogue repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AppEntity;

const APP_COLUMNS: &str = r#"id, name, description, short_description, version, download_url,
       image_url, icon_url, category, downloads, rating, size_label,
       screenshots, features, requirements, is_active,
       last_updated_at, created_at, updated_at"#;

/// Fields for creating an app listing.
#[derive(Debug, Clone)]
pub struct NewApp {
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
}

/// Partial update of an app listing; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct AppChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub version: Option<String>,
    pub download_url: Option<String>,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    pub category: Option<String>,
    pub downloads: Option<i64>,
    pub rating: Option<f64>,
    pub size_label: Option<String>,
    pub screenshots: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
}

/// Repository for app catalogue database operations.
#[derive(Clone)]
pub struct AppRepository {
    pool: PgPool,
}

impl AppRepository {
    /// Creates a new AppRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active apps for the storefront, most downloaded first.
    pub async fn list_active(&self, limit: i64) -> Result<Vec<AppEntity>, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            SELECT {APP_COLUMNS}
            FROM apps
            WHERE is_active = true
            ORDER BY downloads DESC
            LIMIT $1
            "#,
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// List every app for the dashboard, newest first.
    pub async fn list_all(&self) -> Result<Vec<AppEntity>, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            SELECT {APP_COLUMNS}
            FROM apps
            ORDER BY created_at DESC
            "#,
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Find an app by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AppEntity>, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            SELECT {APP_COLUMNS}
            FROM apps
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Create a new app listing.
    pub async fn create(&self, input: NewApp) -> Result<AppEntity, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            INSERT INTO apps (name, description, short_description, version, download_url,
                              image_url, icon_url, category, downloads, rating, size_label,
                              screenshots, features, requirements)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {APP_COLUMNS}
            "#,
        ))
        .bind(input.name)
        .bind(input.description)
        .bind(input.short_description)
        .bind(input.version)
        .bind(input.download_url)
        .bind(input.image_url)
        .bind(input.icon_url)
        .bind(input.category)
        .bind(input.downloads)
        .bind(input.rating)
        .bind(input.size_label)
        .bind(input.screenshots)
        .bind(input.features)
        .bind(input.requirements)
        .fetch_one(&self.pool)
        .await
    }

    /// Apply a partial update; unset fields keep their stored value.
    /// Any change also bumps last_updated_at, which the storefront displays.
    pub async fn update(
        &self,
        id: Uuid,
        changes: AppChanges,
    ) -> Result<Option<AppEntity>, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            UPDATE apps
            SET name              = COALESCE($1, name),
                description       = COALESCE($2, description),
                short_description = COALESCE($3, short_description),
                version           = COALESCE($4, version),
                download_url      = COALESCE($5, download_url),
                image_url         = COALESCE($6, image_url),
                icon_url          = COALESCE($7, icon_url),
                category          = COALESCE($8, category),
                downloads         = COALESCE($9, downloads),
                rating            = COALESCE($10, rating),
                size_label        = COALESCE($11, size_label),
                screenshots       = COALESCE($12, screenshots),
                features          = COALESCE($13, features),
                requirements      = COALESCE($14, requirements),
                last_updated_at   = NOW(),
                updated_at        = NOW()
            WHERE id = $15
            RETURNING {APP_COLUMNS}
            "#,
        ))
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.short_description)
        .bind(changes.version)
        .bind(changes.download_url)
        .bind(changes.image_url)
        .bind(changes.icon_url)
        .bind(changes.category)
        .bind(changes.downloads)
        .bind(changes.rating)
        .bind(changes.size_label)
        .bind(changes.screenshots)
        .bind(changes.features)
        .bind(changes.requirements)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Flip the active flag. Soft deactivation keeps history intact.
    pub async fn set_active(
        &self,
        id: Uuid,
        is_active: bool,
    ) -> Result<Option<AppEntity>, sqlx::Error> {
        sqlx::query_as::<_, AppEntity>(&format!(
            r#"
            UPDATE apps
            SET is_active = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {APP_COLUMNS}
            "#,
        ))
        .bind(is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
