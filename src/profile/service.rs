use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::identity::UserId;
use crate::session::SessionContext;
use crate::storage::RepositoryError;

use super::domain::{
    CandidateProfile, Education, EducationDraft, EducationPatch, EntryId, Experience,
    ExperienceDraft, ExperiencePatch, ProfileFieldsPatch,
};

/// Storage abstraction for the candidate profile, scoped to the owning user.
pub trait ProfileRepository: Send + Sync {
    fn load(&self, owner: &UserId) -> Result<Option<CandidateProfile>, RepositoryError>;
    fn save(&self, owner: &UserId, profile: &CandidateProfile) -> Result<(), RepositoryError>;
}

/// Error raised by the profile manager.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("sign in before editing the candidate profile")]
    AuthRequired,
    #[error("no profile entry matching '{0}'")]
    EntryNotFound(EntryId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id() -> EntryId {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EntryId(format!("entry-{id:06}"))
}

/// Session-scoped manager for the candidate profile.
///
/// The profile is created empty on a user's first access and mutated
/// incrementally. Every mutation is written through the repository before
/// being committed locally, so a backend fault leaves the in-memory profile
/// at its prior state. [`profile`](Self::profile) is the read-only view the
/// fit scorer's callers consume.
pub struct CandidateProfileManager<R> {
    owner: UserId,
    repository: Arc<R>,
    profile: CandidateProfile,
}

impl<R> CandidateProfileManager<R>
where
    R: ProfileRepository,
{
    /// Open the session owner's profile, starting empty on first access.
    pub fn open(repository: Arc<R>, session: &SessionContext) -> Result<Self, ProfileError> {
        let account = session.owner().ok_or(ProfileError::AuthRequired)?;
        let profile = repository.load(&account.id)?.unwrap_or_default();
        Ok(Self {
            owner: account.id.clone(),
            repository,
            profile,
        })
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn update_profile(&mut self, patch: ProfileFieldsPatch) -> Result<(), ProfileError> {
        let mut updated = self.profile.clone();
        patch.apply(&mut updated);
        self.commit(updated)
    }

    pub fn add_experience(&mut self, draft: ExperienceDraft) -> Result<EntryId, ProfileError> {
        let id = next_entry_id();
        let mut updated = self.profile.clone();
        updated.experiences.push(Experience {
            id: id.clone(),
            company: draft.company,
            title: draft.title,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_current_role: draft.is_current_role,
            description: draft.description,
        });
        self.commit(updated)?;
        Ok(id)
    }

    pub fn update_experience(
        &mut self,
        id: &EntryId,
        patch: ExperiencePatch,
    ) -> Result<(), ProfileError> {
        let mut updated = self.profile.clone();
        let entry = updated
            .experiences
            .iter_mut()
            .find(|exp| &exp.id == id)
            .ok_or_else(|| ProfileError::EntryNotFound(id.clone()))?;
        patch.apply(entry);
        self.commit(updated)
    }

    pub fn remove_experience(&mut self, id: &EntryId) -> Result<(), ProfileError> {
        if !self.profile.experiences.iter().any(|exp| &exp.id == id) {
            return Ok(());
        }
        let mut updated = self.profile.clone();
        updated.experiences.retain(|exp| &exp.id != id);
        self.commit(updated)
    }

    pub fn add_education(&mut self, draft: EducationDraft) -> Result<EntryId, ProfileError> {
        let id = next_entry_id();
        let mut updated = self.profile.clone();
        updated.education.push(Education {
            id: id.clone(),
            institution: draft.institution,
            degree: draft.degree,
            field: draft.field,
            start_date: draft.start_date,
            end_date: draft.end_date,
        });
        self.commit(updated)?;
        Ok(id)
    }

    pub fn update_education(
        &mut self,
        id: &EntryId,
        patch: EducationPatch,
    ) -> Result<(), ProfileError> {
        let mut updated = self.profile.clone();
        let entry = updated
            .education
            .iter_mut()
            .find(|edu| &edu.id == id)
            .ok_or_else(|| ProfileError::EntryNotFound(id.clone()))?;
        patch.apply(entry);
        self.commit(updated)
    }

    pub fn remove_education(&mut self, id: &EntryId) -> Result<(), ProfileError> {
        if !self.profile.education.iter().any(|edu| &edu.id == id) {
            return Ok(());
        }
        let mut updated = self.profile.clone();
        updated.education.retain(|edu| &edu.id != id);
        self.commit(updated)
    }

    /// Add a skill; an exact duplicate is a silent no-op.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> Result<(), ProfileError> {
        let skill = skill.into();
        if self.profile.skills.iter().any(|existing| existing == &skill) {
            return Ok(());
        }
        let mut updated = self.profile.clone();
        updated.skills.push(skill);
        self.commit(updated)
    }

    pub fn remove_skill(&mut self, skill: &str) -> Result<(), ProfileError> {
        if !self.profile.skills.iter().any(|existing| existing == skill) {
            return Ok(());
        }
        let mut updated = self.profile.clone();
        updated.skills.retain(|existing| existing != skill);
        self.commit(updated)
    }

    fn commit(&mut self, updated: CandidateProfile) -> Result<(), ProfileError> {
        match self.repository.save(&self.owner, &updated) {
            Ok(()) => {
                self.profile = updated;
                Ok(())
            }
            Err(err) => {
                warn!(owner = %self.owner, error = %err, "failed to persist profile");
                Err(err.into())
            }
        }
    }
}
