use sqlx::PgPool;

use crate::database::models::UserAuthRow;

const FIND_BY_EMAIL: &str = "\
SELECT u.id, u.email, u.password_hash, u.name, u.role,
       u.branch_id, b.name AS branch_name,
       u.line_of_business_id, l.name AS line_of_business_name
FROM users u
LEFT JOIN branches b ON b.id = u.branch_id
LEFT JOIN lines_of_business l ON l.id = u.line_of_business_id
WHERE u.email = $1";

/// Look up a user by unique email, with reference names resolved.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserAuthRow>, sqlx::Error> {
    sqlx::query_as::<_, UserAuthRow>(FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}
