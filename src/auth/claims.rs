use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse access level gating the scope of visible and mutable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// Lightweight {id, name} reference embedded in claims and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSummary {
    pub id: Uuid,
    pub name: String,
}

/// Identity claims carried by the session token.
///
/// This is the explicit record the session issuer produces and the
/// authorization guard consumes; nothing else defines the session shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub branch: Option<RefSummary>,
    pub line_of_business: Option<RefSummary>,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(user: &CurrentUser, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            branch: user.branch.clone(),
            line_of_business: user.line_of_business.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(ttl_days)).timestamp(),
        }
    }
}

/// Authenticated caller context, decoded from the session on each request.
/// Also the safe user profile returned by login and whoami.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub branch: Option<RefSummary>,
    pub line_of_business: Option<RefSummary>,
}

impl From<SessionClaims> for CurrentUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            role: claims.role,
            branch: claims.branch,
            line_of_business: claims.line_of_business,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    }

    #[test]
    fn claims_carry_identity_into_current_user() {
        let user = CurrentUser {
            id: Uuid::new_v4(),
            email: "agent@example.com".to_string(),
            name: "Agent".to_string(),
            role: Role::User,
            branch: Some(RefSummary {
                id: Uuid::new_v4(),
                name: "Head Office".to_string(),
            }),
            line_of_business: None,
        };

        let claims = SessionClaims::new(&user, 30);
        assert!(claims.exp > claims.iat);

        let roundtrip = CurrentUser::from(claims);
        assert_eq!(roundtrip.id, user.id);
        assert_eq!(roundtrip.role, Role::User);
        assert_eq!(roundtrip.branch, user.branch);
    }
}
