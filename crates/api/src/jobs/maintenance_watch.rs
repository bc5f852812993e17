//! Maintenance window watcher.
//!
//! While maintenance mode is on and an end time is known, the window is
//! re-evaluated once per second. When it elapses the watcher turns
//! maintenance off, clears the window, and appends a system entry to the
//! activity log, so the public site returns to normal without an admin
//! having to flip the toggle.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::jobs::scheduler::{Job, JobFrequency};
use domain::models::SiteSettings;
use domain::services::{ActivityBuilder, CountdownSnapshot};
use persistence::repositories::{ActivityLogRepository, SiteSettingsRepository};

/// Per-second job that closes elapsed maintenance windows.
pub struct MaintenanceWatchJob {
    pool: PgPool,
}

impl MaintenanceWatchJob {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Job for MaintenanceWatchJob {
    fn name(&self) -> &'static str {
        "maintenance_watch"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Seconds(1)
    }

    async fn execute(&self) -> Result<(), String> {
        let settings_repo = SiteSettingsRepository::new(self.pool.clone());

        let settings: SiteSettings = match settings_repo.get().await {
            Ok(Some(entity)) => entity.into(),
            Ok(None) => return Ok(()),
            Err(e) => return Err(format!("Failed to read site settings: {}", e)),
        };

        if !settings.maintenance_mode {
            return Ok(());
        }

        let end = match settings.maintenance_end {
            Some(end) => end,
            None => return Ok(()),
        };

        let now = Utc::now();
        let start = settings.maintenance_start.unwrap_or(now);
        let snapshot = CountdownSnapshot::compute(start, end, now);
        if !snapshot.elapsed {
            return Ok(());
        }

        // Conditional update: if another instance already flipped the row,
        // nothing happens here and no duplicate log entry is written.
        let flipped = settings_repo
            .clear_elapsed_maintenance()
            .await
            .map_err(|e| format!("Failed to clear maintenance mode: {}", e))?;

        if flipped {
            info!(end = %end, "Maintenance window elapsed, mode cleared");

            let entry = ActivityBuilder::system_action("disable_maintenance")
                .on_resource_type("maintenance")
                .with_details("Maintenance window elapsed")
                .build();
            ActivityLogRepository::new(self.pool.clone())
                .insert(entry)
                .await
                .map_err(|e| format!("Failed to log maintenance close: {}", e))?;
        }

        Ok(())
    }
}
