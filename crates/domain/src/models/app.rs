//! Published application domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An application listed on the public storefront.
///
/// Apps are never hard-deleted; taking one off the storefront flips
/// `is_active` instead, so download counters and history survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
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

impl App {
    /// Bundled sample listings, served when the storefront read fails so the
    /// home page never renders empty.
    pub fn sample_catalog() -> Vec<App> {
        use chrono::TimeZone;
        let jan_1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let jan_10 = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let jan_15 = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

        vec![
            App {
                id: Uuid::from_u128(0xA001),
                name: "ILYASS TV".to_string(),
                description:
                    "تطبيق مشاهدة القنوات التلفزيونية المباشرة مع جودة عالية وواجهة سهلة الاستخدام"
                        .to_string(),
                short_description: "مشاهدة القنوات المباشرة".to_string(),
                version: "2.1.0".to_string(),
                download_url: "https://example.com/download/ilyass-tv.apk".to_string(),
                image_url: "/images/apps/ilyass-tv.jpg".to_string(),
                icon_url: "/images/apps/ilyass-tv-icon.png".to_string(),
                category: "Entertainment".to_string(),
                downloads: 85_000,
                rating: 4.5,
                size_label: "25 MB".to_string(),
                screenshots: vec![],
                features: vec![
                    "مشاهدة مباشرة".to_string(),
                    "جودة عالية".to_string(),
                    "واجهة سهلة".to_string(),
                ],
                requirements: vec!["Android 5.0+".to_string()],
                is_active: true,
                last_updated_at: jan_15,
                created_at: jan_1,
                updated_at: jan_15,
            },
            App {
                id: Uuid::from_u128(0xA002),
                name: "Video Player Pro".to_string(),
                description: "مشغل فيديو متقدم يدعم جميع صيغ الفيديو مع ميزات متطورة".to_string(),
                short_description: "مشغل فيديو قوي".to_string(),
                version: "1.8.5".to_string(),
                download_url: "https://example.com/download/video-player.apk".to_string(),
                image_url: "/images/apps/video-player.jpg".to_string(),
                icon_url: "/images/apps/video-player-icon.png".to_string(),
                category: "Media".to_string(),
                downloads: 42_000,
                rating: 4.2,
                size_label: "18 MB".to_string(),
                screenshots: vec![],
                features: vec![
                    "دعم جميع الصيغ".to_string(),
                    "تحكم متقدم".to_string(),
                    "ترجمة تلقائية".to_string(),
                ],
                requirements: vec!["Android 4.4+".to_string()],
                is_active: true,
                last_updated_at: jan_10,
                created_at: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
                updated_at: jan_10,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_active_and_well_formed() {
        let catalog = App::sample_catalog();
        assert_eq!(catalog.len(), 2);
        for app in &catalog {
            assert!(app.is_active);
            assert!(app.downloads >= 0);
            assert!((0.0..=5.0).contains(&app.rating));
            assert!(!app.name.is_empty());
        }
    }

    #[test]
    fn test_app_serializes_camel_case() {
        let app = App {
            id: Uuid::new_v4(),
            name: "ILYASS TV".to_string(),
            description: "Live TV streaming".to_string(),
            short_description: "Live TV".to_string(),
            version: "2.1.0".to_string(),
            download_url: "https://cdn.appstore.example/ilyass-tv.apk".to_string(),
            image_url: String::new(),
            icon_url: String::new(),
            category: "entertainment".to_string(),
            downloads: 125_000,
            rating: 4.7,
            size_label: "24 MB".to_string(),
            screenshots: vec![],
            features: vec!["HD streaming".to_string()],
            requirements: vec!["Android 8+".to_string()],
            is_active: true,
            last_updated_at: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&app).unwrap();
        assert!(json.contains("\"downloadUrl\""));
        assert!(json.contains("\"shortDescription\""));
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"sizeLabel\""));
    }
}
