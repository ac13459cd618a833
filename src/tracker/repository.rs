use serde::{Deserialize, Serialize};

use crate::identity::UserId;
use crate::storage::RepositoryError;

use super::domain::{JobApplication, JobId};

/// Storage abstraction over the remote backend, scoped to the owning user.
///
/// Every call is restricted to `owner`'s records; an id belonging to a
/// different user is indistinguishable from an absent one. Stores assign
/// ids at insert. Field-name mapping between this in-memory shape and the
/// stored columns is the adapter's concern.
pub trait JobRepository: Send + Sync {
    fn list(&self, owner: &UserId) -> Result<Vec<JobApplication>, RepositoryError>;
    fn insert(&self, owner: &UserId, job: JobApplication)
        -> Result<JobApplication, RepositoryError>;
    fn update(&self, owner: &UserId, job: &JobApplication) -> Result<(), RepositoryError>;
    /// Deleting an absent record is a no-op, not an error.
    fn delete(&self, owner: &UserId, id: &JobId) -> Result<(), RepositoryError>;
}

/// Outbound notification hook so callers (e.g. a toast layer) can observe
/// successful mutations without polling.
pub trait TrackerEventPublisher: Send + Sync {
    fn publish(&self, event: TrackerEvent) -> Result<(), EventError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerEvent {
    JobCreated {
        id: JobId,
        title: String,
        company: String,
    },
}

/// Event dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("event channel unavailable: {0}")]
    Channel(String),
}
