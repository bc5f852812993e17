//! Admin JWT authentication middleware.
//!
//! Guards the dashboard routes. A request passes only if it carries a valid
//! Bearer token, the token's session row is still live (logout deletes it),
//! and the account's stored role is `admin`. The role is re-read from the
//! database on every request rather than trusted from the token.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::config::JwtAuthConfig;
use persistence::repositories::UserRepository;
use shared::crypto::sha256_hex;
use shared::jwt::JwtConfig;

/// Authenticated admin information extracted from the request.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub user_id: Uuid,
    pub email: String,
    /// Digest of the presented token; logout deletes the matching session.
    pub token_hash: String,
}

/// Creates a JwtConfig from JwtAuthConfig.
pub fn create_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, String> {
    JwtConfig::with_leeway(
        &config.private_key,
        &config.public_key,
        config.token_expiry_secs,
        config.leeway_secs,
    )
    .map_err(|e| format!("Failed to initialize JWT config: {}", e))
}

/// Middleware that requires an authenticated admin.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => return unauthorized_response("Missing or invalid Authorization header"),
    };

    let jwt_config = match create_jwt_config(&state.config.jwt) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to create JWT config: {}", e);
            return internal_error_response("Authentication service unavailable");
        }
    };

    let claims = match jwt_config.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            return unauthorized_response("Invalid or expired token");
        }
    };

    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => return unauthorized_response("Invalid or expired token"),
    };

    let token_hash = sha256_hex(token);
    let users = UserRepository::new(state.pool.clone());

    // A signed token is not enough: the session row must still exist.
    match users.find_live_session(&token_hash).await {
        Ok(Some(session)) if session.user_id == user_id => {}
        Ok(_) => return unauthorized_response("Session has been terminated"),
        Err(e) => {
            tracing::error!("Session lookup failed: {}", e);
            return internal_error_response("Authentication service unavailable");
        }
    }

    let user = match users.find_by_id(user_id).await {
        Ok(Some(entity)) => domain::models::User::from(entity),
        Ok(None) => return unauthorized_response("Session has been terminated"),
        Err(e) => {
            tracing::error!("User lookup failed: {}", e);
            return internal_error_response("Authentication service unavailable");
        }
    };

    if !user.is_admin() {
        return forbidden_response("Not authorized to access the dashboard");
    }

    req.extensions_mut().insert(AdminAuth {
        user_id,
        email: user.email,
        token_hash,
    });
    next.run(req).await
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": message
        })),
    )
        .into_response()
}

fn internal_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response() {
        let response = unauthorized_response("Missing or invalid Authorization header");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_response() {
        let response = forbidden_response("Not authorized to access the dashboard");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response() {
        let response = internal_error_response("Authentication service unavailable");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_admin_auth_clone() {
        let auth = AdminAuth {
            user_id: Uuid::new_v4(),
            email: "admin@appstore.example".to_string(),
            token_hash: "digest".to_string(),
        };
        let cloned = auth.clone();
        assert_eq!(auth.user_id, cloned.user_id);
        assert_eq!(auth.email, cloned.email);
    }
}
