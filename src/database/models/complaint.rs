use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::claims::RefSummary;

/// Flat row produced by the denormalizing complaint select.
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintDetailRow {
    pub id: Uuid,
    pub complaint_number: String,
    pub customer_name: String,
    pub customer_id: String,
    pub policy_number: String,
    pub policy_type: String,
    pub description: String,
    pub channel: String,
    pub status_id: Uuid,
    pub status_name: String,
    pub type_id: Uuid,
    pub type_name: String,
    pub branch_id: Uuid,
    pub branch_name: String,
    pub line_of_business_id: Uuid,
    pub line_of_business_name: String,
    pub created_by_id: Uuid,
    pub created_by_name: String,
    pub assigned_to_id: Option<Uuid>,
    pub assigned_to_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API shape: a complaint with its references denormalized, so callers need
/// no follow-up requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDetail {
    pub id: Uuid,
    pub complaint_number: String,
    pub customer_name: String,
    pub customer_id: String,
    pub policy_number: String,
    pub policy_type: String,
    pub description: String,
    pub channel: String,
    pub status: RefSummary,
    #[serde(rename = "type")]
    pub kind: RefSummary,
    pub branch: RefSummary,
    pub line_of_business: RefSummary,
    pub assigned_to: Option<RefSummary>,
    pub created_by: RefSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ComplaintDetailRow> for ComplaintDetail {
    fn from(row: ComplaintDetailRow) -> Self {
        let assigned_to = match (row.assigned_to_id, row.assigned_to_name) {
            (Some(id), Some(name)) => Some(RefSummary { id, name }),
            _ => None,
        };

        Self {
            id: row.id,
            complaint_number: row.complaint_number,
            customer_name: row.customer_name,
            customer_id: row.customer_id,
            policy_number: row.policy_number,
            policy_type: row.policy_type,
            description: row.description,
            channel: row.channel,
            status: RefSummary {
                id: row.status_id,
                name: row.status_name,
            },
            kind: RefSummary {
                id: row.type_id,
                name: row.type_name,
            },
            branch: RefSummary {
                id: row.branch_id,
                name: row.branch_name,
            },
            line_of_business: RefSummary {
                id: row.line_of_business_id,
                name: row.line_of_business_name,
            },
            assigned_to,
            created_by: RefSummary {
                id: row.created_by_id,
                name: row.created_by_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Ownership columns only, read ahead of writes for the authorization check.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ComplaintOwners {
    pub created_by_id: Uuid,
    pub assigned_to_id: Option<Uuid>,
}

/// Validated field set applied by the complaint update statement.
/// created_by_id is deliberately absent: the creator never changes.
#[derive(Debug, Clone)]
pub struct ComplaintChanges {
    pub customer_name: String,
    pub customer_id: String,
    pub policy_number: String,
    pub policy_type: String,
    pub description: String,
    pub channel: String,
    pub status_id: Uuid,
    pub type_id: Uuid,
    pub branch_id: Uuid,
    pub line_of_business_id: Uuid,
    pub assigned_to_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(assigned: Option<(Uuid, &str)>) -> ComplaintDetailRow {
        ComplaintDetailRow {
            id: Uuid::new_v4(),
            complaint_number: "CMP-0001".to_string(),
            customer_name: "Jane Customer".to_string(),
            customer_id: "C-42".to_string(),
            policy_number: "P-1001".to_string(),
            policy_type: "General".to_string(),
            description: "Delayed claim settlement".to_string(),
            channel: "WEB".to_string(),
            status_id: Uuid::new_v4(),
            status_name: "Open".to_string(),
            type_id: Uuid::new_v4(),
            type_name: "Claims".to_string(),
            branch_id: Uuid::new_v4(),
            branch_name: "Head Office".to_string(),
            line_of_business_id: Uuid::new_v4(),
            line_of_business_name: "Motor".to_string(),
            created_by_id: Uuid::new_v4(),
            created_by_name: "Creator".to_string(),
            assigned_to_id: assigned.map(|(id, _)| id),
            assigned_to_name: assigned.map(|(_, name)| name.to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn detail_denormalizes_references() {
        let assignee = Uuid::new_v4();
        let detail = ComplaintDetail::from(row(Some((assignee, "Assignee"))));

        assert_eq!(detail.status.name, "Open");
        assert_eq!(detail.kind.name, "Claims");
        assert_eq!(detail.assigned_to.as_ref().unwrap().id, assignee);
        assert_eq!(detail.created_by.name, "Creator");
    }

    #[test]
    fn unassigned_complaint_serializes_null_assignee() {
        let detail = ComplaintDetail::from(row(None));
        assert!(detail.assigned_to.is_none());

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value["assignedTo"].is_null());
        assert_eq!(value["lineOfBusiness"]["name"], "Motor");
        assert_eq!(value["type"]["name"], "Claims");
    }
}
