//! Notification queries. Every statement filters on the owning user as well
//! as the id, so a notification belonging to someone else behaves exactly
//! like one that does not exist.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::NotificationRow;

const DETAIL_COLUMNS: &str = "\
SELECT n.id, n.message, n.read, n.user_id, n.complaint_id, n.created_at,
       c.complaint_number, c.customer_name
FROM notifications n
LEFT JOIN complaints c ON c.id = n.complaint_id";

pub async fn fetch_for_user(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<NotificationRow>, sqlx::Error> {
    let sql = format!("{DETAIL_COLUMNS}\nWHERE n.id = $1 AND n.user_id = $2");
    sqlx::query_as::<_, NotificationRow>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<NotificationRow>, sqlx::Error> {
    let sql = format!("{DETAIL_COLUMNS}\nWHERE n.user_id = $1\nORDER BY n.created_at DESC");
    sqlx::query_as::<_, NotificationRow>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Mark a notification read. Returns false when no owned row matched.
pub async fn mark_read(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete an owned notification. Returns false when no owned row matched.
pub async fn delete_for_user(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
