//! End-to-end scenarios for the application tracking and scoring workflow.
//!
//! These drive the public facade only: session resolution, profile
//! construction, fit scoring, and the board lifecycle, with in-memory
//! stand-ins for the identity and persistence capabilities.

mod common {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use autoapply::identity::{IdentityProvider, UserAccount, UserId};
    use autoapply::profile::{CandidateProfile, ProfileRepository};
    use autoapply::session::SessionContext;
    use autoapply::storage::RepositoryError;
    use autoapply::tracker::{
        EventError, JobApplication, JobDraft, JobId, JobRepository, TrackerEvent,
        TrackerEventPublisher,
    };

    pub struct StaticIdentity(pub Option<UserAccount>);

    impl IdentityProvider for StaticIdentity {
        fn current_user(&self) -> Option<UserAccount> {
            self.0.clone()
        }
    }

    pub fn session_for(id: &str) -> SessionContext {
        SessionContext::resolve(&StaticIdentity(Some(UserAccount {
            id: UserId(id.to_string()),
            email: format!("{id}@example.com"),
            display_name: id.to_string(),
        })))
    }

    pub fn draft(title: &str, company: &str) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            company: company.to_string(),
            description: "Design and operate Rust microservices on Kubernetes".to_string(),
            ..JobDraft::default()
        }
    }

    #[derive(Default)]
    pub struct MemoryJobStore {
        sequence: AtomicU64,
        records: Mutex<HashMap<UserId, Vec<JobApplication>>>,
    }

    impl JobRepository for MemoryJobStore {
        fn list(&self, owner: &UserId) -> Result<Vec<JobApplication>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("store mutex poisoned")
                .get(owner)
                .cloned()
                .unwrap_or_default())
        }

        fn insert(
            &self,
            owner: &UserId,
            mut job: JobApplication,
        ) -> Result<JobApplication, RepositoryError> {
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
            let mut guard = self.records.lock().expect("store mutex poisoned");
            if let Some(records) = guard.get_mut(owner) {
                records.retain(|stored| &stored.id != id);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MemoryTrackerEvents {
        events: Mutex<Vec<TrackerEvent>>,
    }

    impl MemoryTrackerEvents {
        pub fn events(&self) -> Vec<TrackerEvent> {
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

    #[derive(Default)]
    pub struct MemoryProfileStore {
        profiles: Mutex<HashMap<UserId, CandidateProfile>>,
    }

    impl ProfileRepository for MemoryProfileStore {
        fn load(&self, owner: &UserId) -> Result<Option<CandidateProfile>, RepositoryError> {
            Ok(self
                .profiles
                .lock()
                .expect("store mutex poisoned")
                .get(owner)
                .cloned())
        }

        fn save(&self, owner: &UserId, profile: &CandidateProfile) -> Result<(), RepositoryError> {
            self.profiles
                .lock()
                .expect("store mutex poisoned")
                .insert(owner.clone(), profile.clone());
            Ok(())
        }
    }
}

use std::sync::Arc;

use autoapply::profile::{CandidateProfileManager, ExperienceDraft};
use autoapply::scoring::FitScoreEngine;
use autoapply::tracker::{JobPatch, JobStatus, JobTrackerService, TrackerEvent};

use common::{draft, session_for, MemoryJobStore, MemoryProfileStore, MemoryTrackerEvents};

#[test]
fn tracked_application_moves_across_the_board() {
    let store = Arc::new(MemoryJobStore::default());
    let events = Arc::new(MemoryTrackerEvents::default());
    let mut tracker =
        JobTrackerService::new(store, events.clone(), session_for("user-1"));

    let stored = tracker
        .create(draft("Backend Engineer", "Acme"))
        .expect("create succeeds");
    assert_eq!(stored.status, JobStatus::ToApply);
    assert!(stored.date_applied.is_none());
    assert_eq!(
        events.events(),
        vec![TrackerEvent::JobCreated {
            id: stored.id.clone(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
        }]
    );

    let applied = tracker
        .move_status(&stored.id, JobStatus::Applied)
        .expect("move succeeds");
    assert_eq!(applied.status, JobStatus::Applied);
    let stamped = applied.date_applied.expect("date_applied stamped");

    let column: Vec<_> = tracker
        .list_by_status(JobStatus::Applied)
        .into_iter()
        .map(|job| job.id.clone())
        .collect();
    assert_eq!(column, vec![stored.id.clone()]);

    let offered = tracker
        .move_status(&stored.id, JobStatus::Offer)
        .expect("move succeeds");
    assert_eq!(offered.status, JobStatus::Offer);
    assert_eq!(
        offered.date_applied,
        Some(stamped),
        "later moves never revisit the stamp"
    );
}

#[test]
fn profile_feeds_the_scorer_and_the_score_lands_on_the_record() {
    let session = session_for("user-1");

    let mut profile = CandidateProfileManager::open(
        Arc::new(MemoryProfileStore::default()),
        &session,
    )
    .expect("open succeeds");
    profile
        .add_experience(ExperienceDraft {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            start_date: "2020".to_string(),
            end_date: String::new(),
            is_current_role: true,
            description: "Operated rust microservices on kubernetes".to_string(),
        })
        .expect("add succeeds");
    profile.add_skill("Rust").expect("add succeeds");
    profile.add_skill("Kubernetes").expect("add succeeds");

    let mut tracker = JobTrackerService::new(
        Arc::new(MemoryJobStore::default()),
        Arc::new(MemoryTrackerEvents::default()),
        session,
    );
    let stored = tracker
        .create(draft("Platform Engineer", "Globex"))
        .expect("create succeeds");

    let engine = FitScoreEngine::default();
    let score = engine.score(&stored.description, &profile.profile().resume_text());
    assert!((20..=100).contains(&score));

    let scored = tracker
        .update(
            &stored.id,
            JobPatch {
                fit_score: Some(score),
                ..JobPatch::default()
            },
        )
        .expect("update succeeds");
    assert_eq!(scored.fit_score, Some(score));
    assert_eq!(scored.status, JobStatus::ToApply, "scoring never moves the record");
}
