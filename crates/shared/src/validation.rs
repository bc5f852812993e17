//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Locales the translation table ships with.
pub const SUPPORTED_LOCALES: [&str; 3] = ["ar", "en", "fr"];

lazy_static! {
    static ref HEX_COLOR_RE: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Validates that a rating is within the 0.0 to 5.0 star range.
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 0.0 and 5.0".into());
        Err(err)
    }
}

/// Validates that a download counter is non-negative.
pub fn validate_downloads(downloads: i64) -> Result<(), ValidationError> {
    if downloads >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("downloads_range");
        err.message = Some("Downloads must be non-negative".into());
        Err(err)
    }
}

/// Validates a CSS hex color in `#rrggbb` form.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a #rrggbb hex value".into());
        Err(err)
    }
}

/// Validates that a locale code is one the platform ships translations for.
pub fn validate_locale(locale: &str) -> Result<(), ValidationError> {
    if SUPPORTED_LOCALES.contains(&locale) {
        Ok(())
    } else {
        let mut err = ValidationError::new("unsupported_locale");
        err.message = Some("Locale must be one of: ar, en, fr".into());
        Err(err)
    }
}

/// Validates a site theme name.
pub fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if theme == "light" || theme == "dark" {
        Ok(())
    } else {
        let mut err = ValidationError::new("theme");
        err.message = Some("Theme must be 'light' or 'dark'".into());
        Err(err)
    }
}
