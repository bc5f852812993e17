//! Dashboard summary repository.
//!
//! Combines independent reads over the catalogue, messages, activity log and
//! site settings. The four reads run concurrently and each one degrades to a
//! missing section on failure, so one bad query never blanks the whole
//! dashboard.

use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;

use crate::repositories::{
    ActivityLogRepository, ContactMessageRepository, SiteSettingsRepository,
};
use domain::models::{
    ActivityOverview, AppsOverview, ChartSeries, DashboardStats, MessageCounters, SettingsOverview,
};

/// Repository for dashboard summary reads.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the dashboard summary. Sections are fetched concurrently with
    /// no ordering dependency; a failed section is logged and omitted.
    pub async fn get_stats(&self) -> DashboardStats {
        let (apps, messages, activity, settings) = tokio::join!(
            self.apps_overview(),
            self.message_counters(),
            self.activity_overview(),
            self.settings_overview(),
        );

        DashboardStats {
            apps: section("apps", apps),
            messages: section("messages", messages),
            activity: section("activity", activity),
            settings: section("settings", settings),
            chart: ChartSeries::placeholder(Utc::now()),
            generated_at: Utc::now(),
        }
    }

    async fn apps_overview(&self) -> Result<AppsOverview, sqlx::Error> {
        let (total, active, downloads): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE is_active = true),
                   COALESCE(SUM(downloads), 0)::BIGINT
            FROM apps
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(AppsOverview::from_totals(total, active, downloads))
    }

    async fn message_counters(&self) -> Result<MessageCounters, sqlx::Error> {
        let (total, unread) = ContactMessageRepository::new(self.pool.clone())
            .counts()
            .await?;
        Ok(MessageCounters { total, unread })
    }

    async fn activity_overview(&self) -> Result<ActivityOverview, sqlx::Error> {
        let (total, last_7_days) = ActivityLogRepository::new(self.pool.clone())
            .counts()
            .await?;
        Ok(ActivityOverview {
            total,
            last_7_days,
        })
    }

    async fn settings_overview(&self) -> Result<SettingsOverview, sqlx::Error> {
        let settings = SiteSettingsRepository::new(self.pool.clone())
            .get_or_default()
            .await?;
        Ok(SettingsOverview {
            maintenance_mode: settings.maintenance_mode,
            maintenance_end: settings.maintenance_end,
        })
    }
}

fn section<T>(name: &str, result: Result<T, sqlx::Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(section = name, error = %e, "Dashboard section failed, omitting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_section_degrades_to_none() {
        assert_eq!(
            section("messages", Ok(MessageCounters { total: 3, unread: 1 })),
            Some(MessageCounters { total: 3, unread: 1 })
        );
        assert_eq!(
            section::<MessageCounters>("messages", Err(sqlx::Error::RowNotFound)),
            None
        );
    }
}
