//! Admin user management routes.

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::routes::auth::UserResponse;
use crate::services::record_activity;
use domain::models::{User, UserRole};
use domain::services::ActivityBuilder;
use persistence::repositories::UserRepository;

const DEFAULT_LIST_LIMIT: i64 = 100;
const MAX_LIST_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let users = UserRepository::new(state.pool.clone())
        .list_users(limit)
        .await?
        .into_iter()
        .map(|entity| UserResponse::from(User::from(entity)))
        .collect();
    Ok(Json(users))
}

/// Request body for changing a user's role.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// PUT /api/v1/admin/users/:id/role
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(auth): Extension<AdminAuth>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let role = UserRole::from_str(&request.role)
        .map_err(|_| ApiError::Validation("Role must be 'admin' or 'user'".to_string()))?;

    // An admin demoting their own account would lock the dashboard.
    if id == auth.user_id {
        return Err(ApiError::Validation(
            "Cannot change your own role".to_string(),
        ));
    }

    let user: User = UserRepository::new(state.pool.clone())
        .update_role(id, role.as_str())
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?
        .into();

    record_activity(
        &state.pool,
        ActivityBuilder::admin_action(auth.user_id, auth.email, "update_user_role")
            .on_resource("user", user.id.to_string())
            .with_details(format!("Set role of {} to {}", user.email, user.role))
            .build(),
    );

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert!(UserRole::from_str("admin").is_ok());
        assert!(UserRole::from_str("user").is_ok());
        assert!(UserRole::from_str("owner").is_err());
    }

    #[test]
    fn test_update_role_request_deserialization() {
        let request: UpdateRoleRequest = serde_json::from_str(r#"{"role": "admin"}"#).unwrap();
        assert_eq!(request.role, "admin");
    }
}
