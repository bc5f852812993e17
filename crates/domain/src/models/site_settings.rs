//! Site settings domain model.
//!
//! The platform keeps a single settings document; mutations always target the
//! row with [`SITE_SETTINGS_ID`]. Concurrent admin edits race with last-write-
//! wins semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::i18n::LocalizedText;

/// Well-known id of the singleton settings row.
pub const SITE_SETTINGS_ID: Uuid = Uuid::from_u128(1);

/// Site-wide settings, covering branding, SEO and the maintenance window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: Uuid,
    pub site_name: String,
    pub site_description: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub theme: Theme,
    pub maintenance_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_end: Option<DateTime<Utc>>,
    pub maintenance_message: LocalizedText,
    pub social_links: SocialLinks,
    pub seo_meta: SeoMeta,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// Settings used when no row exists yet: light theme, empty social links
    /// and SEO metadata, maintenance off.
    pub fn with_defaults() -> Self {
        Self {
            id: SITE_SETTINGS_ID,
            site_name: "App Store Platform".to_string(),
            site_description: "Modern app store platform".to_string(),
            logo_url: String::new(),
            favicon_url: String::new(),
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#6b7280".to_string(),
            theme: Theme::Light,
            maintenance_mode: false,
            maintenance_start: None,
            maintenance_end: None,
            maintenance_message: LocalizedText::from_pairs(&[
                ("ar", "الموقع قيد الصيانة، سنعود قريباً"),
                ("en", "Site under maintenance, we'll be back soon"),
                ("fr", "Site en maintenance, nous reviendrons bientôt"),
            ]),
            social_links: SocialLinks::default(),
            seo_meta: SeoMeta::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Site color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social profile links shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// SEO metadata rendered into page heads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoMeta {
    pub keywords: Vec<String>,
    pub author: String,
    pub og_image: String,
}
