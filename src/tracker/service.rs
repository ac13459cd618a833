use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::identity::UserId;
use crate::session::SessionContext;
use crate::storage::RepositoryError;

use super::domain::{JobApplication, JobCardView, JobDraft, JobId, JobPatch, JobStatus};
use super::repository::{EventError, JobRepository, TrackerEvent, TrackerEventPublisher};

/// Error raised by the tracker service.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("required field '{0}' must not be blank")]
    MissingField(&'static str),
    #[error("fit score {0} is outside the 0-100 range")]
    FitScoreOutOfRange(u8),
    #[error("no tracked application '{0}' for the current user")]
    NotFound(JobId),
    #[error("sign in before modifying tracked applications")]
    AuthRequired,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Event(#[from] EventError),
}

/// Owns one user's tracked applications for the lifetime of a session and
/// enforces the status-transition policy.
///
/// The service keeps a last-known-good cache of the owner's records; every
/// mutation is written through the repository first and committed locally
/// only on success, so a backend fault never corrupts the in-memory view.
/// Methods take `&mut self`: a session is a single logical thread of
/// control, which also keeps the `date_applied` stamping rule race-free.
pub struct JobTrackerService<R, P> {
    repository: Arc<R>,
    events: Arc<P>,
    session: SessionContext,
    jobs: Vec<JobApplication>,
}

impl<R, P> JobTrackerService<R, P>
where
    R: JobRepository,
    P: TrackerEventPublisher,
{
    pub fn new(repository: Arc<R>, events: Arc<P>, session: SessionContext) -> Self {
        Self {
            repository,
            events,
            session,
            jobs: Vec::new(),
        }
    }

    fn owner(&self) -> Result<UserId, TrackerError> {
        self.session
            .owner()
            .map(|account| account.id.clone())
            .ok_or(TrackerError::AuthRequired)
    }

    fn position(&self, id: &JobId) -> Option<usize> {
        self.jobs.iter().position(|job| &job.id == id)
    }

    /// Reload the owner's records from the backend in fetch order.
    ///
    /// On failure the cache keeps its last-known-good contents and the error
    /// is surfaced, so callers can tell a failed read from an empty
    /// collection. Without an owner the service stays local-only and this is
    /// a no-op.
    pub fn refresh(&mut self) -> Result<(), TrackerError> {
        let Some(account) = self.session.owner() else {
            return Ok(());
        };
        match self.repository.list(&account.id) {
            Ok(jobs) => {
                self.jobs = jobs;
                Ok(())
            }
            Err(err) => {
                warn!(owner = %account.id, error = %err, "failed to refresh tracked applications");
                Err(err.into())
            }
        }
    }

    /// Track a new opportunity.
    ///
    /// New records start in `To Apply` with `date_added` stamped and
    /// `date_applied` unset. Title and company are required. A
    /// `JobCreated` event is published once the record is stored; a
    /// publisher fault is reported to the caller but the stored record
    /// stands.
    pub fn create(&mut self, draft: JobDraft) -> Result<JobApplication, TrackerError> {
        let owner = self.owner()?;
        if draft.title.trim().is_empty() {
            return Err(TrackerError::MissingField("title"));
        }
        if draft.company.trim().is_empty() {
            return Err(TrackerError::MissingField("company"));
        }

        let job = JobApplication {
            // Placeholder until the store assigns the real id.
            id: JobId(String::new()),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            description: draft.description,
            url: draft.url,
            notes: draft.notes,
            contact_name: draft.contact_name,
            contact_email: draft.contact_email,
            salary: draft.salary,
            status: JobStatus::ToApply,
            date_added: Utc::now(),
            date_applied: None,
            fit_score: None,
        };

        let stored = match self.repository.insert(&owner, job) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(owner = %owner, error = %err, "failed to store new application");
                return Err(err.into());
            }
        };

        info!(job = %stored.id, company = %stored.company, "tracked new application");
        self.jobs.push(stored.clone());
        self.events.publish(TrackerEvent::JobCreated {
            id: stored.id.clone(),
            title: stored.title.clone(),
            company: stored.company.clone(),
        })?;
        Ok(stored)
    }

    /// Apply a partial field merge to an owned record.
    ///
    /// Never alters `id` or `date_added`. A `status` carried in the patch is
    /// a direct field edit and does not stamp `date_applied`; only
    /// [`move_status`](Self::move_status) applies that rule.
    pub fn update(&mut self, id: &JobId, patch: JobPatch) -> Result<JobApplication, TrackerError> {
        let owner = self.owner()?;
        if let Some(score) = patch.fit_score {
            if score > 100 {
                return Err(TrackerError::FitScoreOutOfRange(score));
            }
        }
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::NotFound(id.clone()))?;

        let mut updated = self.jobs[index].clone();
        patch.apply(&mut updated);
        self.write_back(&owner, index, updated)
    }

    /// Remove an owned record. Idempotent: an absent id is a no-op success.
    pub fn delete(&mut self, id: &JobId) -> Result<(), TrackerError> {
        let owner = self.owner()?;
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        match self.repository.delete(&owner, id) {
            Ok(()) => {
                self.jobs.remove(index);
                info!(job = %id, "removed tracked application");
                Ok(())
            }
            Err(err) => {
                warn!(job = %id, error = %err, "failed to delete application");
                Err(err.into())
            }
        }
    }

    /// Move a record to a new board column. This is the sole path carrying
    /// the timestamp side effect: the first move into `Applied` from a
    /// not-yet-submitted stage stamps `date_applied`, exactly once. Board
    /// drag-and-drop is defined entirely in terms of this operation.
    pub fn move_status(
        &mut self,
        id: &JobId,
        new_status: JobStatus,
    ) -> Result<JobApplication, TrackerError> {
        let owner = self.owner()?;
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::NotFound(id.clone()))?;

        let mut moved = self.jobs[index].clone();
        if new_status == JobStatus::Applied
            && !moved.status.implies_submitted()
            && moved.date_applied.is_none()
        {
            moved.date_applied = Some(Utc::now());
        }
        moved.status = new_status;

        let moved = self.write_back(&owner, index, moved)?;
        info!(job = %moved.id, column = moved.status.label(), "moved application");
        Ok(moved)
    }

    /// Pure filter over the loaded collection, preserving held order.
    pub fn list_by_status(&self, status: JobStatus) -> Vec<&JobApplication> {
        self.jobs.iter().filter(|job| job.status == status).collect()
    }

    pub fn find_by_id(&self, id: &JobId) -> Option<&JobApplication> {
        self.jobs.iter().find(|job| &job.id == id)
    }

    pub fn jobs(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn card_views(&self) -> Vec<JobCardView> {
        self.jobs.iter().map(JobApplication::card_view).collect()
    }

    fn write_back(
        &mut self,
        owner: &UserId,
        index: usize,
        updated: JobApplication,
    ) -> Result<JobApplication, TrackerError> {
        match self.repository.update(owner, &updated) {
            Ok(()) => {
                self.jobs[index] = updated.clone();
                Ok(updated)
            }
            Err(RepositoryError::NotFound) => Err(TrackerError::NotFound(updated.id.clone())),
            Err(err) => {
                warn!(job = %updated.id, error = %err, "failed to persist application update");
                Err(err.into())
            }
        }
    }
}
