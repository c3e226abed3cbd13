use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// notifications row with the related complaint summary left-joined in.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: Uuid,
    pub message: String,
    pub read: bool,
    pub user_id: Uuid,
    pub complaint_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub complaint_number: Option<String>,
    pub customer_name: Option<String>,
}

/// API shape: notification with a compact complaint summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub read: bool,
    pub user_id: Uuid,
    pub complaint_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub complaint: Option<NotificationComplaint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationComplaint {
    pub complaint_number: String,
    pub customer_name: String,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        let complaint = match (row.complaint_number, row.customer_name) {
            (Some(complaint_number), Some(customer_name)) => Some(NotificationComplaint {
                complaint_number,
                customer_name,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            message: row.message,
            read: row.read,
            user_id: row.user_id,
            complaint_id: row.complaint_id,
            created_at: row.created_at,
            complaint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_summary_requires_both_columns() {
        let row = NotificationRow {
            id: Uuid::new_v4(),
            message: "Complaint assigned to you".to_string(),
            read: false,
            user_id: Uuid::new_v4(),
            complaint_id: None,
            created_at: Utc::now(),
            complaint_number: None,
            customer_name: None,
        };

        let notification = Notification::from(row);
        assert!(notification.complaint.is_none());
        assert!(!notification.read);
    }
}
