use sqlx::PgPool;

use crate::auth::claims::CurrentUser;
use crate::database::users;

/// Verify an email/password pair against stored credentials.
///
/// Fails closed: unknown email and wrong password both yield `Ok(None)`, so
/// callers can never distinguish the two.
pub async fn verify_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<CurrentUser>, sqlx::Error> {
    let Some(user) = users::find_by_email(pool, email).await? else {
        return Ok(None);
    };

    if !password_matches(password, &user.password_hash) {
        return Ok(None);
    }

    Ok(Some(user.into_profile()))
}

/// Constant-time hash comparison; verification faults also fail closed.
fn password_matches(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(err) => {
            tracing::warn!("password verification error: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_password_verifies() {
        // Minimum cost keeps the test fast
        let hash = bcrypt::hash("correct horse battery staple", 4).unwrap();
        assert!(password_matches("correct horse battery staple", &hash));
    }

    #[test]
    fn wrong_password_fails_closed() {
        let hash = bcrypt::hash("correct horse battery staple", 4).unwrap();
        assert!(!password_matches("incorrect horse", &hash));
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!password_matches("anything", "not-a-bcrypt-hash"));
        assert!(!password_matches("anything", ""));
    }
}
