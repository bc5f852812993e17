//! Dashboard summary domain models.
//!
//! The dashboard combines independent reads; every section is optional so a
//! failed read degrades that section to `null` instead of failing the whole
//! summary.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of downloads counted as visitors. A heuristic, not measured traffic.
const VISITOR_RATIO: f64 = 0.3;
/// Share of total downloads reported as recent.
const RECENT_DOWNLOAD_RATIO: f64 = 0.1;
/// Share of total visitors reported as recent.
const RECENT_VISITOR_RATIO: f64 = 0.15;

/// Complete dashboard summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub apps: Option<AppsOverview>,
    pub messages: Option<MessageCounters>,
    pub activity: Option<ActivityOverview>,
    pub settings: Option<SettingsOverview>,
    pub chart: ChartSeries,
    pub generated_at: DateTime<Utc>,
}

/// App catalogue counters plus traffic estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsOverview {
    pub total_apps: i64,
    pub active_apps: i64,
    pub total_downloads: i64,
    pub total_visitors: i64,
    pub recent_downloads: i64,
    pub recent_visitors: i64,
}

impl AppsOverview {
    /// Derives the overview from raw catalogue counters.
    ///
    /// Visitor and recency figures are fixed-ratio estimates of the download
    /// totals, not time-windowed measurements.
    pub fn from_totals(total_apps: i64, active_apps: i64, total_downloads: i64) -> Self {
        let total_visitors = (total_downloads as f64 * VISITOR_RATIO).floor() as i64;
        Self {
            total_apps,
            active_apps,
            total_downloads,
            total_visitors,
            recent_downloads: (total_downloads as f64 * RECENT_DOWNLOAD_RATIO).floor() as i64,
            recent_visitors: (total_visitors as f64 * RECENT_VISITOR_RATIO).floor() as i64,
        }
    }
}

/// Contact message counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCounters {
    pub total: i64,
    pub unread: i64,
}

/// Activity log counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOverview {
    pub total: i64,
    pub last_7_days: i64,
}

/// Maintenance state as seen by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverview {
    pub maintenance_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_end: Option<DateTime<Utc>>,
}

/// Seven labeled points for the trailing week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub downloads: Vec<i64>,
    pub visitors: Vec<i64>,
}

impl ChartSeries {
    /// Builds placeholder series for the seven days ending at `now`.
    ///
    /// Values are drawn uniformly from [200, 1200) downloads and [100, 600)
    /// visitors per day.
    // TODO: replace with real per-day aggregation once download/visit events
    // are recorded with timestamps.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        let mut rng = rand::thread_rng();
        let mut labels = Vec::with_capacity(7);
        let mut downloads = Vec::with_capacity(7);
        let mut visitors = Vec::with_capacity(7);

        for offset in (0..7).rev() {
            let day = now - Duration::days(offset);
            labels.push(format!("{} {}", day.day(), month_abbrev(day.month())));
            downloads.push(rng.gen_range(200..1200));
            visitors.push(rng.gen_range(100..600));
        }

        Self {
            labels,
            downloads,
            visitors,
        }
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_apps_overview_ratios() {
        let overview = AppsOverview::from_totals(12, 10, 125_000);
        assert_eq!(overview.total_apps, 12);
        assert_eq!(overview.active_apps, 10);
        assert_eq!(overview.total_downloads, 125_000);
        assert_eq!(overview.total_visitors, 37_500);
        assert_eq!(overview.recent_downloads, 12_500);
        assert_eq!(overview.recent_visitors, 5_625);
    }

    #[test]
    fn test_apps_overview_zero_downloads() {
        let overview = AppsOverview::from_totals(0, 0, 0);
        assert_eq!(overview.total_visitors, 0);
        assert_eq!(overview.recent_downloads, 0);
        assert_eq!(overview.recent_visitors, 0);
    }

    #[test]
    fn test_placeholder_chart_shape_and_bounds() {
        let now = Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap();
        let chart = ChartSeries::placeholder(now);

        assert_eq!(chart.labels.len(), 7);
        assert_eq!(chart.downloads.len(), 7);
        assert_eq!(chart.visitors.len(), 7);
        assert_eq!(chart.labels[6], "7 Aug");
        assert_eq!(chart.labels[0], "1 Aug");
        assert!(chart.downloads.iter().all(|v| (200..1200).contains(v)));
        assert!(chart.visitors.iter().all(|v| (100..600).contains(v)));
    }

    #[test]
    fn test_stats_serialize_with_missing_sections() {
        let stats = DashboardStats {
            apps: Some(AppsOverview::from_totals(1, 1, 100)),
            messages: None,
            activity: None,
            settings: None,
            chart: ChartSeries::default(),
            generated_at: Utc::now(),
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"messages\":null"));
        assert!(json.contains("\"totalDownloads\":100"));
    }
}
