//! Ownership rules as pure predicates over (requester, resource ownership),
//! evaluated per request with no store or network dependency.

use uuid::Uuid;

use crate::auth::claims::{CurrentUser, Role};

/// Complaint access rule: admins, the creator, and the current assignee may
/// read and mutate a complaint.
pub fn can_access_complaint(
    requester: &CurrentUser,
    created_by: Uuid,
    assigned_to: Option<Uuid>,
) -> bool {
    requester.role == Role::Admin
        || requester.id == created_by
        || assigned_to == Some(requester.id)
}

/// Attachments inherit the access rule of their owning complaint.
pub fn can_delete_attachment(
    requester: &CurrentUser,
    complaint_created_by: Uuid,
    complaint_assigned_to: Option<Uuid>,
) -> bool {
    can_access_complaint(requester, complaint_created_by, complaint_assigned_to)
}

// Notifications carry no predicate here: ownership is enforced by the lookup
// filter itself (id AND user_id), with no admin override.

#[cfg(test)]
mod tests {
    use super::*;

    fn requester(role: Role) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "agent@example.com".to_string(),
            name: "Agent".to_string(),
            role,
            branch: None,
            line_of_business: None,
        }
    }

    #[test]
    fn admin_can_access_any_complaint() {
        let admin = requester(Role::Admin);
        assert!(can_access_complaint(&admin, Uuid::new_v4(), None));
        assert!(can_access_complaint(
            &admin,
            Uuid::new_v4(),
            Some(Uuid::new_v4())
        ));
    }

    #[test]
    fn creator_can_access_own_complaint() {
        let user = requester(Role::User);
        assert!(can_access_complaint(&user, user.id, None));
    }

    #[test]
    fn assignee_can_access_assigned_complaint() {
        let user = requester(Role::User);
        assert!(can_access_complaint(&user, Uuid::new_v4(), Some(user.id)));
    }

    #[test]
    fn unrelated_user_is_denied() {
        let user = requester(Role::User);
        assert!(!can_access_complaint(&user, Uuid::new_v4(), None));
        assert!(!can_access_complaint(
            &user,
            Uuid::new_v4(),
            Some(Uuid::new_v4())
        ));
    }

    #[test]
    fn attachment_rule_follows_owning_complaint() {
        let user = requester(Role::User);
        assert!(can_delete_attachment(&user, Uuid::new_v4(), Some(user.id)));
        assert!(!can_delete_attachment(&user, Uuid::new_v4(), None));
    }
}
