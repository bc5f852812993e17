//! Activity log routes.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::ActivityLog;
use persistence::repositories::ActivityLogRepository;

const DEFAULT_LIST_LIMIT: i64 = 100;
const MAX_LIST_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/activity-logs
pub async fn list_activity_logs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ActivityLog>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let logs = ActivityLogRepository::new(state.pool.clone())
        .list(limit)
        .await?
        .into_iter()
        .map(ActivityLog::from)
        .collect();
    Ok(Json(logs))
}
