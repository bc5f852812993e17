use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{rate_limit_middleware, require_admin, RateLimiterState};
use crate::routes::{
    activity_logs, apps, auth, content, dashboard, health, i18n, messages, public_config,
    site_settings, users,
};
use crate::services::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
    pub email: EmailService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Rate limiting applies to the public write endpoints; 0 disables it.
    let rate_limiter = if config.security.rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.rate_limit_per_minute,
        )))
    } else {
        None
    };

    let email = EmailService::new(config.email.clone());

    let state = AppState {
        pool,
        config: config.clone(),
        rate_limiter,
        email,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public read surface (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/config", get(public_config::get_public_config))
        .route("/api/v1/languages", get(i18n::list_languages))
        .route("/api/v1/translations", get(i18n::get_translations))
        .route("/api/v1/locale", put(i18n::set_locale))
        .route("/api/v1/apps", get(apps::list_public_apps))
        .route("/api/v1/apps/:id", get(apps::get_public_app))
        .route(
            "/api/v1/maintenance",
            get(site_settings::get_maintenance_status),
        )
        .route("/api/v1/content/about", get(content::get_about_content));

    // Public write surface, rate limited per client
    let limited_routes = Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/messages", post(messages::submit_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Logout validates its own token and is deliberately idempotent
    let session_routes = Router::new().route("/api/v1/auth/logout", post(auth::logout));

    // Dashboard surface (requires a live admin session)
    let admin_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/admin/dashboard", get(dashboard::get_dashboard))
        .route(
            "/api/v1/admin/apps",
            get(apps::list_apps).post(apps::create_app),
        )
        .route(
            "/api/v1/admin/apps/:id",
            put(apps::update_app).delete(apps::deactivate_app),
        )
        .route("/api/v1/admin/apps/:id/activate", post(apps::activate_app))
        .route("/api/v1/admin/messages", get(messages::list_messages))
        .route(
            "/api/v1/admin/messages/:id/read",
            put(messages::mark_message_read),
        )
        .route(
            "/api/v1/admin/messages/:id/reply",
            post(messages::reply_to_message),
        )
        .route("/api/v1/admin/users", get(users::list_users))
        .route("/api/v1/admin/users/:id/role", put(users::update_user_role))
        .route(
            "/api/v1/admin/settings",
            get(site_settings::get_settings).put(site_settings::update_settings),
        )
        .route(
            "/api/v1/admin/settings/maintenance",
            post(site_settings::toggle_maintenance),
        )
        .route(
            "/api/v1/admin/activity-logs",
            get(activity_logs::list_activity_logs),
        )
        .route(
            "/api/v1/admin/content/about",
            put(content::update_about_content),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Health endpoints (no authentication required)
    let health_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready));

    Router::new()
        .merge(health_routes)
        .merge(public_routes)
        .merge(limited_routes)
        .merge(session_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
