//! Job-application lifecycle tracking.
//!
//! [`JobTrackerService`] owns one user's records for the duration of a
//! session: creation with validation, partial updates, idempotent deletion,
//! board filtering, and the status-move operation that carries the
//! `date_applied` stamping rule. Persistence and UI notification are
//! consumed through the traits in [`repository`].

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    JobApplication, JobCardView, JobDraft, JobId, JobPatch, JobStatus, BOARD_COLUMNS,
};
pub use repository::{EventError, JobRepository, TrackerEvent, TrackerEventPublisher};
pub use service::{JobTrackerService, TrackerError};
