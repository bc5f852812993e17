//! Authentication routes for admin login, logout and identity.

use axum::{
    extract::{Extension, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::services::auth::{AuthError, AuthService};
use domain::models::User;
use persistence::repositories::UserRepository;

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
            role: user.role.to_string(),
            created_at: user.created_at.to_rfc3339(),
            last_login_at: user.last_login_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response body for successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

fn map_auth_error(error: AuthError) -> ApiError {
    match error {
        AuthError::NotFound => ApiError::NotFound("No account with that email".to_string()),
        AuthError::InvalidCredential => ApiError::Unauthorized("Invalid credentials".to_string()),
        AuthError::InvalidInputFormat(msg) => ApiError::Validation(msg),
        // Pass/fail only: the stored role is not echoed back.
        AuthError::Unauthorized => {
            ApiError::Forbidden("Not authorized to access the dashboard".to_string())
        }
        AuthError::Database(e) => ApiError::from(e),
        AuthError::Password(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::Token(e) => ApiError::Internal(format!("Token error: {}", e)),
    }
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), &state.config.jwt)
        .map_err(|e| ApiError::Internal(format!("Failed to initialize auth service: {}", e)))?;

    let outcome = auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(outcome.user),
        access_token: outcome.access_token,
        token_type: "Bearer".to_string(),
        expires_in: outcome.expires_in,
    }))
}

/// POST /api/v1/auth/logout
///
/// Terminates the presented session. Idempotent: a missing or already
/// terminated session still yields 204.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        let auth_service = AuthService::new(state.pool.clone(), &state.config.jwt)
            .map_err(|e| ApiError::Internal(format!("Failed to initialize auth service: {}", e)))?;
        auth_service.logout(token).await.map_err(map_auth_error)?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(auth.user_id)
        .await?
        .map(User::from)
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "admin@appstore.example".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_invalid_email() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            email: "admin@appstore.example".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_admin_maps_to_forbidden_without_role_detail() {
        let error = map_auth_error(AuthError::Unauthorized);
        match error {
            ApiError::Forbidden(msg) => {
                assert!(!msg.contains("user"));
                assert!(!msg.contains("role"));
            }
            _ => panic!("Expected Forbidden"),
        }
    }

    #[test]
    fn test_invalid_credential_maps_to_unauthorized() {
        assert!(matches!(
            map_auth_error(AuthError::InvalidCredential),
            ApiError::Unauthorized(_)
        ));
    }
}
