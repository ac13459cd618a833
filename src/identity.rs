//! Capability contracts for the identity and entitlement collaborators.
//!
//! The core never performs sign-in itself; it asks an [`IdentityProvider`]
//! who the current user is and scopes all storage access to that owner.
//! Entitlement checking exists only so surrounding UI can gate premium
//! affordances; nothing in this crate branches on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for user accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the signed-in user as reported by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
}

/// Source of the current authenticated user, if any.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<UserAccount>;
}

/// Premium access flag returned by the billing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub subscribed: bool,
}

/// Boundary to the subscription/billing collaborator.
pub trait EntitlementGateway {
    fn check_entitlement(&self, user: &UserId) -> Result<Entitlement, EntitlementError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EntitlementError {
    #[error("entitlement backend unavailable: {0}")]
    Transport(String),
}
