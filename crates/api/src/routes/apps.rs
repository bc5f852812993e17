//! App catalogue routes: the public storefront and the admin CRUD surface.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::services::record_activity;
use domain::models::App;
use domain::services::ActivityBuilder;
use persistence::repositories::{AppChanges, AppRepository, NewApp};

const DEFAULT_STOREFRONT_LIMIT: i64 = 24;
const MAX_STOREFRONT_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/apps
///
/// Public storefront listing: active apps, most downloaded first. A failed
/// read degrades to the bundled sample catalogue instead of an empty page.
pub async fn list_public_apps(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<App>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_STOREFRONT_LIMIT)
        .clamp(1, MAX_STOREFRONT_LIMIT);

    match AppRepository::new(state.pool.clone()).list_active(limit).await {
        Ok(entities) => Json(entities.into_iter().map(App::from).collect()),
        Err(e) => {
            warn!(error = %e, "Storefront app read failed, serving sample catalogue");
            Json(App::sample_catalog())
        }
    }
}

/// GET /api/v1/apps/:id
pub async fn get_public_app(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<App>, ApiError> {
    let app = AppRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .map(App::from)
        .filter(|app| app.is_active)
        .ok_or_else(|| ApiError::NotFound("App not found".to_string()))?;

    Ok(Json(app))
}

/// GET /api/v1/admin/apps
pub async fn list_apps(State(state): State<AppState>) -> Result<Json<Vec<App>>, ApiError> {
    let apps = AppRepository::new(state.pool.clone())
        .list_all()
        .await?
        .into_iter()
        .map(App::from)
        .collect();
    Ok(Json(apps))
}

/// Request body for creating an app listing.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub version: String,

    #[validate(url(message = "Download URL must be a valid URL"))]
    pub download_url: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub icon_url: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_downloads"))]
    pub downloads: i64,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: f64,

    #[serde(default)]
    pub size_label: String,

    #[serde(default)]
    pub screenshots: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub requirements: Vec<String>,
}

/// POST /api/v1/admin/apps
pub async fn create_app(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Json(request): Json<CreateAppRequest>,
) -> Result<(StatusCode, Json<App>), ApiError> {
    request.validate()?;

    let app: App = AppRepository::new(state.pool.clone())
        .create(NewApp {
            name: request.name,
            description: request.description,
            short_description: request.short_description,
            version: request.version,
            download_url: request.download_url,
            image_url: request.image_url,
            icon_url: request.icon_url,
            category: request.category,
            downloads: request.downloads,
            rating: request.rating,
            size_label: request.size_label,
            screenshots: request.screenshots,
            features: request.features,
            requirements: request.requirements,
        })
        .await?
        .into();

    info!(app_id = %app.id, name = %app.name, "App created");

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "create_app")
            .on_resource("app", app.id.to_string())
            .with_details(format!("Created app {}", app.name))
            .build(),
    );

    Ok((StatusCode::CREATED, Json(app)))
}

/// Request body for updating an app; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub version: Option<String>,
    #[validate(url(message = "Download URL must be a valid URL"))]
    pub download_url: Option<String>,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    pub category: Option<String>,
    #[validate(custom(function = "shared::validation::validate_downloads"))]
    pub downloads: Option<i64>,
    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<f64>,
    pub size_label: Option<String>,
    pub screenshots: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
}

/// PUT /api/v1/admin/apps/:id
pub async fn update_app(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAppRequest>,
) -> Result<Json<App>, ApiError> {
    request.validate()?;

    let app: App = AppRepository::new(state.pool.clone())
        .update(
            id,
            AppChanges {
                name: request.name,
                description: request.description,
                short_description: request.short_description,
                version: request.version,
                download_url: request.download_url,
                image_url: request.image_url,
                icon_url: request.icon_url,
                category: request.category,
                downloads: request.downloads,
                rating: request.rating,
                size_label: request.size_label,
                screenshots: request.screenshots,
                features: request.features,
                requirements: request.requirements,
            },
        )
        .await?
        .map(App::from)
        .ok_or_else(|| ApiError::NotFound("App not found".to_string()))?;

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "update_app")
            .on_resource("app", app.id.to_string())
            .with_details(format!("Updated app {}", app.name))
            .build(),
    );

    Ok(Json(app))
}

/// DELETE /api/v1/admin/apps/:id
///
/// Soft-deactivates the listing; nothing is removed from storage.
pub async fn deactivate_app(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
) -> Result<Json<App>, ApiError> {
    set_app_active(state, auth, id, false).await
}

/// POST /api/v1/admin/apps/:id/activate
pub async fn activate_app(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
) -> Result<Json<App>, ApiError> {
    set_app_active(state, auth, id, true).await
}

async fn set_app_active(
    state: AppState,
    auth: AdminAuth,
    id: Uuid,
    is_active: bool,
) -> Result<Json<App>, ApiError> {
    let app: App = AppRepository::new(state.pool.clone())
        .set_active(id, is_active)
        .await?
        .map(App::from)
        .ok_or_else(|| ApiError::NotFound("App not found".to_string()))?;

    let action = if is_active {
        "activate_app"
    } else {
        "deactivate_app"
    };

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, action)
            .on_resource("app", app.id.to_string())
            .with_details(format!(
                "{} app {}",
                if is_active { "Activated" } else { "Deactivated" },
                app.name
            ))
            .build(),
    );

    Ok(Json(app))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateAppRequest {
        CreateAppRequest {
            name: "ILYASS TV".to_string(),
            description: String::new(),
            short_description: String::new(),
            version: "2.1.0".to_string(),
            download_url: "https://cdn.appstore.example/ilyass-tv.apk".to_string(),
            image_url: String::new(),
            icon_url: String::new(),
            category: "entertainment".to_string(),
            downloads: 0,
            rating: 4.5,
            size_label: "25 MB".to_string(),
            screenshots: vec![],
            features: vec![],
            requirements: vec![],
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let mut request = create_request();
        request.name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_url() {
        let mut request = create_request();
        request.download_url = "not a url".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_out_of_range_rating() {
        let mut request = create_request();
        request.rating = 5.5;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_downloads() {
        let mut request = create_request();
        request.downloads = -5;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_partial_deserialization() {
        let request: UpdateAppRequest =
            serde_json::from_str(r#"{"version": "2.2.0", "rating": 4.8}"#).unwrap();
        assert_eq!(request.version.as_deref(), Some("2.2.0"));
        assert_eq!(request.rating, Some(4.8));
        assert!(request.name.is_none());
        assert!(request.validate().is_ok());
    }
}
