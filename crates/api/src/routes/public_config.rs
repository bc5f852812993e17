//! Public site configuration endpoint.
//!
//! Exposes the environment-provided site identity so clients can render
//! without hardcoding it. Everything here has a safe fallback default, so the
//! endpoint is usable even with no configuration at all.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;
use domain::i18n::{Language, LANGUAGES};

/// Public configuration response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub site_name: String,
    pub site_url: String,
    pub version: String,
    pub default_locale: String,
    pub languages: &'static [Language],
}

/// GET /api/v1/config
pub async fn get_public_config(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    Json(PublicConfigResponse {
        site_name: state.config.site.name.clone(),
        site_url: state.config.site.url.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        default_locale: state.config.site.default_locale.clone(),
        languages: &LANGUAGES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_languages() {
        let response = PublicConfigResponse {
            site_name: "App Store Platform".to_string(),
            site_url: "http://localhost:8080".to_string(),
            version: "0.6.2".to_string(),
            default_locale: "ar".to_string(),
            languages: &LANGUAGES,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"siteName\":\"App Store Platform\""));
        assert!(json.contains("\"defaultLocale\":\"ar\""));
        assert!(json.contains("\"nativeName\":\"Français\""));
    }
}
