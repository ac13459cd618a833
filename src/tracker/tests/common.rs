use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::identity::{IdentityProvider, UserAccount, UserId};
use crate::session::SessionContext;
use crate::storage::RepositoryError;
use crate::tracker::domain::{JobApplication, JobDraft, JobId};
use crate::tracker::repository::{EventError, JobRepository, TrackerEvent, TrackerEventPublisher};
use crate::tracker::service::JobTrackerService;

pub(super) struct StaticIdentity(pub(super) Option<UserAccount>);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserAccount> {
        self.0.clone()
    }
}

pub(super) fn account(id: &str) -> UserAccount {
    UserAccount {
        id: UserId(id.to_string()),
        email: format!("{id}@example.com"),
        display_name: id.to_string(),
    }
}

pub(super) fn session_for(id: &str) -> SessionContext {
    SessionContext::resolve(&StaticIdentity(Some(account(id))))
}

pub(super) fn draft() -> JobDraft {
    JobDraft {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: "Build rust services for the job board".to_string(),
        url: "https://acme.example.com/careers/42".to_string(),
        notes: String::new(),
        ..JobDraft::default()
    }
}

#[derive(Default)]
pub(super) struct MemoryJobStore {
    sequence: AtomicU64,
    records: Mutex<HashMap<UserId, Vec<JobApplication>>>,
    unavailable: AtomicBool,
}

impl MemoryJobStore {
    pub(super) fn stored(&self, owner: &UserId) -> Vec<JobApplication> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(owner)
            .cloned()
            .unwrap_or_default()
    }

    /// Simulate the backend going down for subsequent calls.
    pub(super) fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(RepositoryError::Unavailable("backend offline".to_string()));
        }
        Ok(())
    }
}

impl JobRepository for MemoryJobStore {
    fn list(&self, owner: &UserId) -> Result<Vec<JobApplication>, RepositoryError> {
        self.check_available()?;
        Ok(self.stored(owner))
    }

    fn insert(
        &self,
        owner: &UserId,
        mut job: JobApplication,
    ) -> Result<JobApplication, RepositoryError> {
        self.check_available()?;
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        job.id = JobId(format!("job-{id:06}"));
        self.records
            .lock()
            .expect("store mutex poisoned")
            .entry(owner.clone())
            .or_default()
            .push(job.clone());
        Ok(job)
    }

    fn update(&self, owner: &UserId, job: &JobApplication) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let records = guard.get_mut(owner).ok_or(RepositoryError::NotFound)?;
        let slot = records
            .iter_mut()
            .find(|stored| stored.id == job.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = job.clone();
        Ok(())
    }

    fn delete(&self, owner: &UserId, id: &JobId) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if let Some(records) = guard.get_mut(owner) {
            records.retain(|stored| &stored.id != id);
        }
        Ok(())
    }
}

pub(super) struct UnavailableJobStore;

impl JobRepository for UnavailableJobStore {
    fn list(&self, _owner: &UserId) -> Result<Vec<JobApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(
        &self,
        _owner: &UserId,
        _job: JobApplication,
    ) -> Result<JobApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _owner: &UserId, _job: &JobApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _owner: &UserId, _id: &JobId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryTrackerEvents {
    events: Mutex<Vec<TrackerEvent>>,
}

impl MemoryTrackerEvents {
    pub(super) fn events(&self) -> Vec<TrackerEvent> {
        self.events.lock().expect("event mutex poisoned").clone()
    }
}

impl TrackerEventPublisher for MemoryTrackerEvents {
    fn publish(&self, event: TrackerEvent) -> Result<(), EventError> {
        self.events
            .lock()
            .expect("event mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    JobTrackerService<MemoryJobStore, MemoryTrackerEvents>,
    Arc<MemoryJobStore>,
    Arc<MemoryTrackerEvents>,
) {
    let store = Arc::new(MemoryJobStore::default());
    let events = Arc::new(MemoryTrackerEvents::default());
    let service = JobTrackerService::new(store.clone(), events.clone(), session_for("user-1"));
    (service, store, events)
}
