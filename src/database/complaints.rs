use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{ComplaintChanges, ComplaintDetailRow, ComplaintOwners};

/// Denormalizing select shared by the detail and list reads.
const DETAIL_COLUMNS: &str = "\
SELECT c.id, c.complaint_number, c.customer_name, c.customer_id,
       c.policy_number, c.policy_type, c.description, c.channel,
       c.status_id, s.name AS status_name,
       c.type_id, t.name AS type_name,
       c.branch_id, b.name AS branch_name,
       c.line_of_business_id, l.name AS line_of_business_name,
       c.created_by_id, cu.name AS created_by_name,
       c.assigned_to_id, au.name AS assigned_to_name,
       c.created_at, c.updated_at
FROM complaints c
JOIN complaint_statuses s ON s.id = c.status_id
JOIN complaint_types t ON t.id = c.type_id
JOIN branches b ON b.id = c.branch_id
JOIN lines_of_business l ON l.id = c.line_of_business_id
JOIN users cu ON cu.id = c.created_by_id
LEFT JOIN users au ON au.id = c.assigned_to_id";

const UPDATE: &str = "\
UPDATE complaints
SET customer_name = $2,
    customer_id = $3,
    policy_number = $4,
    policy_type = $5,
    description = $6,
    channel = $7,
    status_id = $8,
    type_id = $9,
    branch_id = $10,
    line_of_business_id = $11,
    assigned_to_id = $12,
    updated_at = NOW()
WHERE id = $1";

const INSERT_ACTION: &str = "\
INSERT INTO complaint_actions (description, complaint_id, user_id)
VALUES ($1, $2, $3)";

pub async fn fetch_detail(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ComplaintDetailRow>, sqlx::Error> {
    let sql = format!("{DETAIL_COLUMNS}\nWHERE c.id = $1");
    sqlx::query_as::<_, ComplaintDetailRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Ownership columns only, for the authorization check ahead of a write.
pub async fn fetch_owners(pool: &PgPool, id: Uuid) -> Result<Option<ComplaintOwners>, sqlx::Error> {
    sqlx::query_as::<_, ComplaintOwners>(
        "SELECT created_by_id, assigned_to_id FROM complaints WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<ComplaintDetailRow>, sqlx::Error> {
    let sql = format!("{DETAIL_COLUMNS}\nORDER BY c.created_at DESC");
    sqlx::query_as::<_, ComplaintDetailRow>(&sql)
        .fetch_all(pool)
        .await
}

/// USER-role scope: complaints where the requester is the current assignee.
pub async fn list_assigned_to(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ComplaintDetailRow>, sqlx::Error> {
    let sql = format!("{DETAIL_COLUMNS}\nWHERE c.assigned_to_id = $1\nORDER BY c.created_at DESC");
    sqlx::query_as::<_, ComplaintDetailRow>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Apply a validated update. Returns false when the row no longer exists.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    changes: &ComplaintChanges,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(UPDATE)
        .bind(id)
        .bind(&changes.customer_name)
        .bind(&changes.customer_id)
        .bind(&changes.policy_number)
        .bind(&changes.policy_type)
        .bind(&changes.description)
        .bind(&changes.channel)
        .bind(changes.status_id)
        .bind(changes.type_id)
        .bind(changes.branch_id)
        .bind(changes.line_of_business_id)
        .bind(changes.assigned_to_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Append one audit row for a complaint mutation.
pub async fn insert_action(
    pool: &PgPool,
    complaint_id: Uuid,
    user_id: Uuid,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_ACTION)
        .bind(description)
        .bind(complaint_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
