//! Locale selection and translation endpoints.
//!
//! The visitor's locale choice persists in a cookie; per request it resolves
//! cookie, then Accept-Language, then the configured default. Resolution
//! never fails - an unsupported value just falls through to the next source.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::app::AppState;
use crate::error::ApiError;
use domain::i18n::{self, TextDirection};
use shared::validation::{validate_locale, SUPPORTED_LOCALES};

/// Cookie the locale preference persists in.
pub const LOCALE_COOKIE: &str = "locale";

/// Resolve the request's locale: cookie, then Accept-Language, then default.
pub fn resolve_locale(jar: &CookieJar, headers: &HeaderMap, default: &str) -> String {
    if let Some(cookie) = jar.get(LOCALE_COOKIE) {
        if SUPPORTED_LOCALES.contains(&cookie.value()) {
            return cookie.value().to_string();
        }
    }

    if let Some(accept) = headers.get("accept-language").and_then(|v| v.to_str().ok()) {
        for tag in accept.split(',') {
            let code = tag.split(';').next().unwrap_or("").trim();
            let prefix = code.get(..2).unwrap_or("");
            if SUPPORTED_LOCALES.contains(&prefix) {
                return prefix.to_string();
            }
        }
    }

    default.to_string()
}

/// Locale info returned after resolution or selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResponse {
    pub locale: String,
    pub dir: TextDirection,
}

/// Request body for selecting a locale.
#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

/// PUT /api/v1/locale
///
/// Persists the visitor's locale choice in a long-lived cookie and reports
/// the text direction the client should switch to.
pub async fn set_locale(
    jar: CookieJar,
    Json(request): Json<SetLocaleRequest>,
) -> Result<(CookieJar, Json<LocaleResponse>), ApiError> {
    validate_locale(&request.locale)
        .map_err(|e| ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default()))?;

    let cookie = Cookie::build((LOCALE_COOKIE, request.locale.clone()))
        .path("/")
        .permanent()
        .build();

    let dir = i18n::current_language(&request.locale).dir;
    Ok((
        jar.add(cookie),
        Json(LocaleResponse {
            locale: request.locale,
            dir,
        }),
    ))
}

/// GET /api/v1/languages
pub async fn list_languages() -> Json<&'static [i18n::Language]> {
    Json(&i18n::LANGUAGES)
}

#[derive(Debug, Deserialize)]
pub struct TranslationsQuery {
    pub locale: Option<String>,
}

/// Translation table resolved for one locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsResponse {
    pub locale: String,
    pub dir: TextDirection,
    pub messages: HashMap<String, String>,
}

/// GET /api/v1/translations
pub async fn get_translations(
    State(state): State<AppState>,
    Query(query): Query<TranslationsQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Json<TranslationsResponse> {
    let locale = query
        .locale
        .filter(|l| SUPPORTED_LOCALES.contains(&l.as_str()))
        .unwrap_or_else(|| resolve_locale(&jar, &headers, &state.config.site.default_locale));

    Json(TranslationsResponse {
        dir: i18n::current_language(&locale).dir,
        messages: i18n::resolved_table(&locale),
        locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn jar_with_locale(locale: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(LOCALE_COOKIE, locale.to_string()))
    }

    #[test]
    fn test_resolve_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert("accept-language", HeaderValue::from_static("fr-FR,fr;q=0.9"));
        assert_eq!(resolve_locale(&jar_with_locale("en"), &headers, "ar"), "en");
    }

    #[test]
    fn test_resolve_ignores_unsupported_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_locale(&jar_with_locale("de"), &headers, "ar"), "ar");
    }

    #[test]
    fn test_resolve_uses_accept_language() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "accept-language",
            HeaderValue::from_static("de-DE,de;q=0.9,fr-FR;q=0.8"),
        );
        assert_eq!(resolve_locale(&CookieJar::new(), &headers, "ar"), "fr");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_locale(&CookieJar::new(), &headers, "ar"), "ar");
    }

    #[test]
    fn test_translations_response_serialization() {
        let response = TranslationsResponse {
            locale: "ar".to_string(),
            dir: TextDirection::Rtl,
            messages: domain::i18n::resolved_table("ar"),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"dir\":\"rtl\""));
        assert!(json.contains("nav.home"));
    }
}
