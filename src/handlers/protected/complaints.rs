use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{policy, CurrentUser, Role};
use crate::database::complaints;
use crate::database::models::{ComplaintChanges, ComplaintDetail};
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /api/complaints/:id request body. Everything arrives optional so that
/// required-field validation owns the 400, not deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub policy_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub status_id: Option<String>,
    #[serde(default)]
    pub branch_id: Option<String>,
    #[serde(default)]
    pub line_of_business_id: Option<String>,
    #[serde(default)]
    pub assigned_to_id: Option<String>,
}

impl ComplaintUpdate {
    /// Required fields must be present and non-empty; reference ids must be
    /// well-formed UUIDs. policyType and channel fall back to their defaults.
    pub fn validate(self) -> Result<ComplaintChanges, ApiError> {
        Ok(ComplaintChanges {
            customer_name: require(self.customer_name)?,
            customer_id: require(self.customer_id)?,
            policy_number: require(self.policy_number)?,
            policy_type: non_empty(self.policy_type).unwrap_or_else(|| "General".to_string()),
            description: require(self.description)?,
            channel: non_empty(self.channel).unwrap_or_else(|| "WEB".to_string()),
            status_id: require_ref(self.status_id)?,
            type_id: require_ref(self.type_id)?,
            branch_id: require_ref(self.branch_id)?,
            line_of_business_id: require_ref(self.line_of_business_id)?,
            assigned_to_id: match non_empty(self.assigned_to_id) {
                Some(value) => Some(parse_ref(&value)?),
                None => None,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn require(value: Option<String>) -> Result<String, ApiError> {
    non_empty(value).ok_or_else(|| ApiError::bad_request("Missing required fields"))
}

fn require_ref(value: Option<String>) -> Result<Uuid, ApiError> {
    parse_ref(&require(value)?)
}

fn parse_ref(value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value.trim()).map_err(|_| ApiError::bad_request("Invalid field format"))
}

/// GET /api/complaints - ADMIN sees every complaint; USER only those
/// currently assigned to them (assignment, not authorship, drives the list).
pub async fn complaint_list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ComplaintDetail>>, ApiError> {
    let rows = match user.role {
        Role::Admin => complaints::list_all(&state.pool).await?,
        Role::User => complaints::list_assigned_to(&state.pool, user.id).await?,
    };

    Ok(Json(rows.into_iter().map(ComplaintDetail::from).collect()))
}

/// GET /api/complaints/:id
pub async fn complaint_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComplaintDetail>, ApiError> {
    let row = complaints::fetch_detail(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Complaint not found"))?;

    if !policy::can_access_complaint(&user, row.created_by_id, row.assigned_to_id) {
        return Err(ApiError::forbidden("Forbidden"));
    }

    Ok(Json(row.into()))
}

/// PUT /api/complaints/:id - update a complaint and append its audit row.
pub async fn complaint_put(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ComplaintUpdate>,
) -> Result<Json<ComplaintDetail>, ApiError> {
    let owners = complaints::fetch_owners(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Complaint not found"))?;

    if !policy::can_access_complaint(&user, owners.created_by_id, owners.assigned_to_id) {
        return Err(ApiError::forbidden("Forbidden"));
    }

    let changes = payload.validate()?;

    // The row can vanish between the ownership read and the write; the store
    // reports that as zero rows, surfaced as 404.
    if !complaints::update(&state.pool, id, &changes).await? {
        return Err(ApiError::not_found("Complaint not found"));
    }

    complaints::insert_action(&state.pool, id, user.id, "Complaint details updated").await?;

    let row = complaints::fetch_detail(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Complaint not found"))?;

    tracing::info!(complaint = %id, user = %user.id, "complaint updated");
    Ok(Json(row.into()))
}
