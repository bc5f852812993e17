//! Translation table and locale handling.
//!
//! The public site ships Arabic, English and French. Lookups fall back from
//! the requested locale to English, and finally to the key itself, so a
//! missing translation can never take a page down.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale the site starts in when a visitor has no stored preference.
pub const DEFAULT_LOCALE: &str = "ar";

/// Locale used when a key has no entry for the requested locale.
pub const FALLBACK_LOCALE: &str = "en";

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// A language the platform is localized for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub dir: TextDirection,
    pub flag: &'static str,
}

/// Languages in display order; the first entry is the default.
pub const LANGUAGES: [Language; 3] = [
    Language {
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        dir: TextDirection::Rtl,
        flag: "🇸🇦",
    },
    Language {
        code: "en",
        name: "English",
        native_name: "English",
        dir: TextDirection::Ltr,
        flag: "🇺🇸",
    },
    Language {
        code: "fr",
        name: "French",
        native_name: "Français",
        dir: TextDirection::Ltr,
        flag: "🇫🇷",
    },
];

/// (key, ar, en, fr)
const TABLE: &[(&str, &str, &str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية", "Home", "Accueil"),
    ("nav.about", "حولنا", "About", "À propos"),
    ("nav.contact", "اتصل بنا", "Contact", "Contact"),
    ("nav.dashboard", "لوحة التحكم", "Dashboard", "Tableau de bord"),
    ("nav.login", "تسجيل الدخول", "Login", "Connexion"),
    ("nav.logout", "تسجيل الخروج", "Logout", "Déconnexion"),
    // Home page
    ("home.title", "متجر التطبيقات", "App Store", "Magasin d'applications"),
    (
        "home.subtitle",
        "اكتشف وحمّل أفضل التطبيقات",
        "Discover and download the best apps",
        "Découvrez et téléchargez les meilleures applications",
    ),
    ("home.featuredApps", "التطبيقات المميزة", "Featured Apps", "Applications en vedette"),
    ("home.download", "تحميل", "Download", "Télécharger"),
    ("home.downloads", "التحميلات", "Downloads", "Téléchargements"),
    ("home.version", "الإصدار", "Version", "Version"),
    ("home.size", "الحجم", "Size", "Taille"),
    ("home.rating", "التقييم", "Rating", "Évaluation"),
    ("home.lastUpdated", "آخر تحديث", "Last Updated", "Dernière mise à jour"),
    // About page
    ("about.title", "حول الموقع", "About Us", "À propos de nous"),
    (
        "about.description",
        "منصة حديثة لتوزيع التطبيقات مع أحدث التقنيات",
        "A modern platform for app distribution with cutting-edge technology",
        "Une plateforme moderne de distribution d'applications avec une technologie de pointe",
    ),
    // Contact page
    ("contact.title", "اتصل بنا", "Contact Us", "Contactez-nous"),
    ("contact.subtitle", "نحن هنا لمساعدتك", "We're here to help", "Nous sommes là pour vous aider"),
    ("contact.name", "الاسم", "Name", "Nom"),
    ("contact.email", "البريد الإلكتروني", "Email", "E-mail"),
    ("contact.message", "الرسالة", "Message", "Message"),
    ("contact.send", "إرسال", "Send", "Envoyer"),
    ("contact.success", "تم إرسال الرسالة بنجاح!", "Message sent successfully!", "Message envoyé avec succès!"),
    ("contact.error", "حدث خطأ أثناء الإرسال", "Error sending message", "Erreur lors de l'envoi"),
    // Login page
    ("login.title", "تسجيل الدخول", "Login", "Connexion"),
    ("login.email", "البريد الإلكتروني", "Email", "E-mail"),
    ("login.password", "كلمة المرور", "Password", "Mot de passe"),
    ("login.submit", "دخول", "Sign In", "Se connecter"),
    ("login.error", "خطأ في تسجيل الدخول", "Login error", "Erreur de connexion"),
    // Dashboard
    ("dashboard.title", "لوحة التحكم", "Dashboard", "Tableau de bord"),
    ("dashboard.welcome", "مرحباً بك", "Welcome", "Bienvenue"),
    ("dashboard.stats", "الإحصائيات", "Statistics", "Statistiques"),
    ("dashboard.apps", "التطبيقات", "Apps", "Applications"),
    ("dashboard.users", "المستخدمون", "Users", "Utilisateurs"),
    ("dashboard.messages", "الرسائل", "Messages", "Messages"),
    ("dashboard.settings", "الإعدادات", "Settings", "Paramètres"),
    ("dashboard.maintenance", "وضع الصيانة", "Maintenance Mode", "Mode maintenance"),
    ("dashboard.logs", "السجلات", "Logs", "Journaux"),
    // Maintenance page
    ("maintenance.title", "الموقع قيد الصيانة", "Site Under Maintenance", "Site en maintenance"),
    ("maintenance.subtitle", "سنعود قريباً", "We'll be back soon", "Nous reviendrons bientôt"),
    ("maintenance.timeLeft", "الوقت المتبقي", "Time Remaining", "Temps restant"),
    ("maintenance.days", "أيام", "Days", "Jours"),
    ("maintenance.hours", "ساعات", "Hours", "Heures"),
    ("maintenance.minutes", "دقائق", "Minutes", "Minutes"),
    ("maintenance.seconds", "ثواني", "Seconds", "Secondes"),
    // Common
    ("common.save", "حفظ", "Save", "Enregistrer"),
    ("common.cancel", "إلغاء", "Cancel", "Annuler"),
    ("common.delete", "حذف", "Delete", "Supprimer"),
    ("common.edit", "تعديل", "Edit", "Modifier"),
    ("common.loading", "جاري التحميل...", "Loading...", "Chargement..."),
    ("common.error", "خطأ", "Error", "Erreur"),
    ("common.success", "نجح", "Success", "Succès"),
    // Footer
    ("footer.copyright", "جميع الحقوق محفوظة", "All rights reserved", "Tous droits réservés"),
    ("footer.followUs", "تابعنا", "Follow Us", "Suivez-nous"),
    // Stats
    ("stats.totalDownloads", "إجمالي التحميلات", "Total Downloads", "Téléchargements totaux"),
    ("stats.totalVisitors", "إجمالي الزوار", "Total Visitors", "Visiteurs totaux"),
    ("stats.thisMonth", "هذا الشهر", "This Month", "Ce mois"),
    ("stats.lastMonth", "الشهر الماضي", "Last Month", "Le mois dernier"),
];

lazy_static! {
    static ref TRANSLATIONS: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut map = HashMap::with_capacity(TABLE.len());
        for (key, ar, en, fr) in TABLE {
            let mut entry = HashMap::with_capacity(3);
            entry.insert("ar", *ar);
            entry.insert("en", *en);
            entry.insert("fr", *fr);
            map.insert(*key, entry);
        }
        map
    };
}

/// Looks up a translation for `key` in `locale`.
///
/// Falls back to English, then to the key itself. Never fails.
pub fn translate(key: &str, locale: &str) -> String {
    TRANSLATIONS
        .get(key)
        .and_then(|entry| entry.get(locale).or_else(|| entry.get(FALLBACK_LOCALE)))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Returns the full translation table resolved for one locale.
pub fn resolved_table(locale: &str) -> HashMap<String, String> {
    TRANSLATIONS
        .keys()
        .map(|key| (key.to_string(), translate(key, locale)))
        .collect()
}

/// Finds the language descriptor for a locale code, defaulting to the first
/// entry of [`LANGUAGES`].
pub fn current_language(locale: &str) -> &'static Language {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == locale)
        .unwrap_or(&LANGUAGES[0])
}

/// Whether the locale renders right-to-left.
pub fn is_rtl(locale: &str) -> bool {
    current_language(locale).dir == TextDirection::Rtl
}

/// A stored localized string: a locale-code → text map.
///
/// Readers resolve with the same fallback order as the translation table so
/// a document missing a locale key renders rather than panics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText(pub HashMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builds a localized value from (locale, text) pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(locale, text)| (locale.to_string(), text.to_string()))
                .collect(),
        )
    }

    pub fn insert(&mut self, locale: &str, text: &str) {
        self.0.insert(locale.to_string(), text.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the text for a locale: requested locale, then English, then
    /// any stored value, then the empty string.
    pub fn resolve(&self, locale: &str) -> &str {
        self.0
            .get(locale)
            .or_else(|| self.0.get(FALLBACK_LOCALE))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate("nav.home", "en"), "Home");
        assert_eq!(translate("nav.home", "ar"), "الرئيسية");
        assert_eq!(translate("nav.home", "fr"), "Accueil");
    }

    #[test]
    fn test_translate_unknown_locale_falls_back_to_english() {
        assert_eq!(translate("nav.home", "de"), "Home");
        assert_eq!(translate("maintenance.title", "pt"), "Site Under Maintenance");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate("nav.nonexistent", "en"), "nav.nonexistent");
        assert_eq!(translate("", "ar"), "");
    }

    #[test]
    fn test_resolved_table_covers_all_keys() {
        let table = resolved_table("fr");
        assert_eq!(table.len(), TABLE.len());
        assert_eq!(table.get("common.save").map(String::as_str), Some("Enregistrer"));
    }

    #[test]
    fn test_current_language_defaults_to_arabic() {
        assert_eq!(current_language("ar").code, "ar");
        assert_eq!(current_language("xx").code, "ar");
    }

    #[test]
    fn test_is_rtl() {
        assert!(is_rtl("ar"));
        assert!(!is_rtl("en"));
        assert!(!is_rtl("fr"));
        // Unknown locales inherit the default language's direction.
        assert!(is_rtl("xx"));
    }

    #[test]
    fn test_localized_text_resolve_order() {
        let text = LocalizedText::from_pairs(&[("ar", "مرحبا"), ("en", "Hello")]);
        assert_eq!(text.resolve("ar"), "مرحبا");
        assert_eq!(text.resolve("fr"), "Hello");

        let english_only = LocalizedText::from_pairs(&[("en", "Hello")]);
        assert_eq!(english_only.resolve("ar"), "Hello");

        let french_only = LocalizedText::from_pairs(&[("fr", "Bonjour")]);
        assert_eq!(french_only.resolve("ar"), "Bonjour");

        assert_eq!(LocalizedText::new().resolve("en"), "");
    }

    #[test]
    fn test_localized_text_serde_roundtrip() {
        let text = LocalizedText::from_pairs(&[("en", "Hello"), ("fr", "Bonjour")]);
        let json = serde_json::to_string(&text).unwrap();
        let back: LocalizedText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }
}
