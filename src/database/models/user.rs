use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::claims::{CurrentUser, RefSummary, Role};

/// users row joined with branch and line-of-business names, as loaded for
/// credential verification.
#[derive(Debug, Clone, FromRow)]
pub struct UserAuthRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub branch_id: Option<Uuid>,
    pub branch_name: Option<String>,
    pub line_of_business_id: Option<Uuid>,
    pub line_of_business_name: Option<String>,
}

impl UserAuthRow {
    /// Safe profile: everything except the password hash.
    pub fn into_profile(self) -> CurrentUser {
        CurrentUser {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            branch: zip_ref(self.branch_id, self.branch_name),
            line_of_business: zip_ref(self.line_of_business_id, self.line_of_business_name),
        }
    }
}

fn zip_ref(id: Option<Uuid>, name: Option<String>) -> Option<RefSummary> {
    Some(RefSummary {
        id: id?,
        name: name?,
    })
}
