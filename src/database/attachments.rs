use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::AttachmentWithOwners;

const FETCH_WITH_OWNERS: &str = "\
SELECT a.id, a.path, a.file_name, a.complaint_id,
       c.created_by_id, c.assigned_to_id
FROM attachments a
JOIN complaints c ON c.id = a.complaint_id
WHERE a.id = $1";

/// Load an attachment together with its owning complaint's ownership columns.
pub async fn fetch_with_owners(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AttachmentWithOwners>, sqlx::Error> {
    sqlx::query_as::<_, AttachmentWithOwners>(FETCH_WITH_OWNERS)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete the attachment record. The stored file is the handler's concern.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM attachments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
