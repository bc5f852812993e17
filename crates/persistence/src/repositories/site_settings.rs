//! Site settings repository for database operations.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::entities::SiteSettingsEntity;
use domain::models::{SiteSettings, SITE_SETTINGS_ID};

const SETTINGS_COLUMNS: &str = r#"id, site_name, site_description, logo_url, favicon_url,
       primary_color, secondary_color, theme, maintenance_mode,
       maintenance_start, maintenance_end, maintenance_message,
       social_links, seo_meta, updated_at"#;

/// Repository for the singleton site settings row.
#[derive(Clone)]
pub struct SiteSettingsRepository {
    pool: PgPool,
}

impl SiteSettingsRepository {
    /// Creates a new SiteSettingsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row if one has been written.
    pub async fn get(&self) -> Result<Option<SiteSettingsEntity>, sqlx::Error> {
        sqlx::query_as::<_, SiteSettingsEntity>(&format!(
            r#"
            SELECT {SETTINGS_COLUMNS}
            FROM site_settings
            WHERE id = $1
            "#,
        ))
        .bind(SITE_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await
    }

    /// Fetch settings, falling back to the in-memory defaults when no row
    /// exists yet. The defaults are not persisted by this read.
    pub async fn get_or_default(&self) -> Result<SiteSettings, sqlx::Error> {
        Ok(self
            .get()
            .await?
            .map(SiteSettings::from)
            .unwrap_or_else(SiteSettings::with_defaults))
    }

    /// Write the whole settings document, creating the row on first use.
    /// Concurrent writers race with last-write-wins semantics.
    pub async fn upsert(
        &self,
        settings: &SiteSettings,
    ) -> Result<SiteSettingsEntity, sqlx::Error> {
        sqlx::query_as::<_, SiteSettingsEntity>(&format!(
            r#"
            INSERT INTO site_settings (id, site_name, site_description, logo_url, favicon_url,
                                       primary_color, secondary_color, theme, maintenance_mode,
                                       maintenance_start, maintenance_end, maintenance_message,
                                       social_links, seo_meta, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NOW())
            ON CONFLICT (id) DO UPDATE
            SET site_name           = EXCLUDED.site_name,
                site_description    = EXCLUDED.site_description,
                logo_url            = EXCLUDED.logo_url,
                favicon_url         = EXCLUDED.favicon_url,
                primary_color       = EXCLUDED.primary_color,
                secondary_color     = EXCLUDED.secondary_color,
                theme               = EXCLUDED.theme,
                maintenance_mode    = EXCLUDED.maintenance_mode,
                maintenance_start   = EXCLUDED.maintenance_start,
                maintenance_end     = EXCLUDED.maintenance_end,
                maintenance_message = EXCLUDED.maintenance_message,
                social_links        = EXCLUDED.social_links,
                seo_meta            = EXCLUDED.seo_meta,
                updated_at          = NOW()
            RETURNING {SETTINGS_COLUMNS}
            "#,
        ))
        .bind(SITE_SETTINGS_ID)
        .bind(&settings.site_name)
        .bind(&settings.site_description)
        .bind(&settings.logo_url)
        .bind(&settings.favicon_url)
        .bind(&settings.primary_color)
        .bind(&settings.secondary_color)
        .bind(settings.theme.as_str())
        .bind(settings.maintenance_mode)
        .bind(settings.maintenance_start)
        .bind(settings.maintenance_end)
        .bind(Json(&settings.maintenance_message))
        .bind(Json(&settings.social_links))
        .bind(Json(&settings.seo_meta))
        .fetch_one(&self.pool)
        .await
    }

    /// Turn maintenance mode off and clear the window, but only if it is
    /// currently on. Returns true when a row was flipped; used by the
    /// maintenance watcher so two racing sweeps log a single action.
    pub async fn clear_elapsed_maintenance(&self) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE site_settings
            SET maintenance_mode = false,
                maintenance_start = NULL,
                maintenance_end = NULL,
                updated_at = NOW()
            WHERE id = $1 AND maintenance_mode = true
            "#,
        )
        .bind(SITE_SETTINGS_ID)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
