//! Integration tests for the public API surface.
//!
//! These exercise routing, validation, locale handling and auth gating
//! through the real router. None of them require a database connection.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use common::test_app;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}

#[tokio::test]
async fn public_config_reports_site_identity() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["siteName"], "App Store Platform");
    assert_eq!(json["defaultLocale"], "ar");
    assert_eq!(json["languages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn languages_lists_all_three_locales() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|lang| lang["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["ar", "en", "fr"]);
}

#[tokio::test]
async fn translations_resolve_for_requested_locale() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/translations?locale=fr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["locale"], "fr");
    assert_eq!(json["dir"], "ltr");
    assert_eq!(json["messages"]["nav.home"], "Accueil");
}

#[tokio::test]
async fn translations_fall_back_to_default_locale() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/translations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["locale"], "ar");
    assert_eq!(json["dir"], "rtl");
}

#[tokio::test]
async fn translations_honor_accept_language() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/translations")
                .header("accept-language", "en-US,en;q=0.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["locale"], "en");
    assert_eq!(json["messages"]["nav.home"], "Home");
}

#[tokio::test]
async fn set_locale_persists_choice_in_cookie() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/locale")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"locale": "en"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("locale cookie should be set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("locale=en"));

    let json = body_json(response).await;
    assert_eq!(json["dir"], "ltr");
}

#[tokio::test]
async fn set_locale_rejects_unsupported_code() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/locale")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"locale": "de"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_malformed_email_before_any_lookup() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": "not-an-email", "password": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn contact_submission_rejects_empty_fields_before_any_write() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/messages")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name": "", "email": "ali@example.com", "message": "Hello"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_requires_authentication() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/admin/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn admin_mutations_require_authentication() {
    for (method, uri) in [
        ("POST", "/api/v1/admin/apps"),
        ("PUT", "/api/v1/admin/settings"),
        ("POST", "/api/v1/admin/settings/maintenance"),
        ("GET", "/api/v1/admin/activity-logs"),
    ] {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} should require auth",
            method,
            uri
        );
    }
}

#[tokio::test]
async fn logout_without_token_is_idempotent() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
