use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::{policy, CurrentUser};
use crate::database::attachments;
use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /api/attachments/:id
///
/// Removes the stored file first, best-effort, then the record
/// unconditionally: a missing or undeletable file never blocks cleanup.
pub async fn attachment_delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let attachment = attachments::fetch_with_owners(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Attachment not found"))?;

    if !policy::can_delete_attachment(&user, attachment.created_by_id, attachment.assigned_to_id) {
        return Err(ApiError::forbidden("Forbidden"));
    }

    let file_path = state.config.storage.upload_dir.join(&attachment.path);
    if let Err(err) = tokio::fs::remove_file(&file_path).await {
        tracing::warn!(
            path = %file_path.display(),
            "failed to delete attachment file: {}", err
        );
    }

    attachments::delete(&state.pool, id).await?;

    tracing::info!(attachment = %id, user = %user.id, "attachment deleted");
    Ok(Json(json!({ "message": "Attachment deleted successfully" })))
}
