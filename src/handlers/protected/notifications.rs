//! Notification endpoints. Lookups filter on the owning user, so another
//! user's notification is reported as absent rather than forbidden.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::database::models::Notification;
use crate::database::notifications;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/notifications - the caller's notifications, newest first.
pub async fn notification_list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let rows = notifications::list_for_user(&state.pool, user.id).await?;
    Ok(Json(rows.into_iter().map(Notification::from).collect()))
}

/// GET /api/notifications/:id
pub async fn notification_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    let row = notifications::fetch_for_user(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;

    Ok(Json(row.into()))
}

/// PUT /api/notifications/:id - mark as read.
pub async fn notification_put(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    if !notifications::mark_read(&state.pool, id, user.id).await? {
        return Err(ApiError::not_found("Notification not found"));
    }

    let row = notifications::fetch_for_user(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;

    Ok(Json(row.into()))
}

/// DELETE /api/notifications/:id
pub async fn notification_delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !notifications::delete_for_user(&state.pool, id, user.id).await? {
        return Err(ApiError::not_found("Notification not found"));
    }

    Ok(Json(json!({ "message": "Notification deleted" })))
}
