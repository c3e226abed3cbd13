use sqlx::FromRow;
use uuid::Uuid;

/// attachments row joined with its owning complaint's ownership columns,
/// as needed for the delete authorization check.
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentWithOwners {
    pub id: Uuid,
    pub path: String,
    pub file_name: String,
    pub complaint_id: Uuid,
    pub created_by_id: Uuid,
    pub assigned_to_id: Option<Uuid>,
}
