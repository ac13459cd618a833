//! Session-scoped owner context.
//!
//! The managers in this crate take an explicit [`SessionContext`] instead of
//! reaching into ambient application state. A context is resolved once when
//! a user session begins and dropped when it ends; without an authenticated
//! owner the managers operate in a local-only, write-disabled mode.

use crate::identity::{IdentityProvider, UserAccount};

#[derive(Debug, Clone)]
pub struct SessionContext {
    user: Option<UserAccount>,
}

impl SessionContext {
    /// Snapshot the current user from the identity capability.
    pub fn resolve(identity: &dyn IdentityProvider) -> Self {
        Self {
            user: identity.current_user(),
        }
    }

    /// Context with no owner; reads work against local state, writes are refused.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn owner(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{UserAccount, UserId};

    struct StaticIdentity(Option<UserAccount>);

    impl IdentityProvider for StaticIdentity {
        fn current_user(&self) -> Option<UserAccount> {
            self.0.clone()
        }
    }

    #[test]
    fn resolve_captures_the_signed_in_user() {
        let identity = StaticIdentity(Some(UserAccount {
            id: UserId("user-1".to_string()),
            email: "user-1@example.com".to_string(),
            display_name: "User One".to_string(),
        }));

        let session = SessionContext::resolve(&identity);
        assert!(session.is_authenticated());
        assert_eq!(session.owner().map(|a| a.id.0.as_str()), Some("user-1"));
    }

    #[test]
    fn anonymous_session_has_no_owner() {
        let session = SessionContext::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.owner().is_none());
    }
}
