//! About-page content domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{self, LocalizedText};

/// Localized content for the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub id: String,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub images: Vec<String>,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}

impl AboutContent {
    /// Content served when no document has been stored yet, built from the
    /// bundled translation table.
    pub fn default_content() -> Self {
        let mut title = LocalizedText::new();
        let mut content = LocalizedText::new();
        for lang in &i18n::LANGUAGES {
            title.insert(lang.code, &i18n::translate("about.title", lang.code));
            content.insert(lang.code, &i18n::translate("about.description", lang.code));
        }

        Self {
            id: "about".to_string(),
            title,
            content,
            images: Vec::new(),
            is_published: true,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_resolves_for_every_locale() {
        let about = AboutContent::default_content();
        assert!(about.is_published);
        for locale in ["ar", "en", "fr"] {
            assert!(!about.title.resolve(locale).is_empty());
            assert!(!about.content.resolve(locale).is_empty());
        }
    }

    #[test]
    fn test_default_content_falls_back_for_unknown_locale() {
        let about = AboutContent::default_content();
        assert_eq!(about.title.resolve("de"), "About Us");
    }
}
