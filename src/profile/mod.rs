//! Candidate profile management.
//!
//! A session-scoped manager over the user's resume-relevant data: scalar
//! contact fields, ordered experience and education lists, and a
//! duplicate-free skill set. [`CandidateProfile::resume_text`] renders the
//! profile into the candidate text the fit scorer consumes.

pub mod domain;
pub mod service;

pub use domain::{
    CandidateProfile, Education, EducationDraft, EducationPatch, EntryId, Experience,
    ExperienceDraft, ExperiencePatch, ProfileFieldsPatch,
};
pub use service::{CandidateProfileManager, ProfileError, ProfileRepository};
