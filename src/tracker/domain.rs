use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for tracked job applications. Assigned by the
/// persistence capability at insert and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stage of a tracked application; drives board column placement.
///
/// Any status may move to any other status. The only transition side effect
/// lives in the tracker service: first entry into `Applied` stamps
/// `date_applied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "To Apply")]
    ToApply,
    Applied,
    Interview,
    Offer,
    Rejected,
}

/// Conventional display order of the board columns.
pub const BOARD_COLUMNS: [JobStatus; 5] = [
    JobStatus::ToApply,
    JobStatus::Applied,
    JobStatus::Interview,
    JobStatus::Offer,
    JobStatus::Rejected,
];

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::ToApply => "To Apply",
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// Whether this stage implies an application was already submitted.
    pub const fn implies_submitted(self) -> bool {
        matches!(self, JobStatus::Applied | JobStatus::Interview | JobStatus::Offer)
    }
}

/// One tracked job opportunity, owned by exactly one user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub notes: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub salary: Option<String>,
    pub status: JobStatus,
    pub date_added: DateTime<Utc>,
    /// Set exactly once, on the first move into `Applied`; never cleared.
    pub date_applied: Option<DateTime<Utc>>,
    /// Integer in `[0, 100]`; absent until explicitly computed.
    pub fit_score: Option<u8>,
}

impl JobApplication {
    pub fn card_view(&self) -> JobCardView {
        JobCardView {
            id: self.id.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            status: self.status.label(),
            fit_score: self.fit_score,
            date_applied: self.date_applied,
        }
    }
}

/// Sanitized board-card projection for rendering a column entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCardView {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<DateTime<Utc>>,
}

/// Payload for creating a record. Status, dates, and score are assigned by
/// the tracker service, the id by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub notes: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub salary: Option<String>,
}

/// Partial field merge for a tracked application.
///
/// Cannot touch `id`, `date_added`, or `date_applied`. A `status` carried
/// here is a direct field edit: it bypasses the `date_applied` stamping rule
/// that `move_status` applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub salary: Option<String>,
    pub status: Option<JobStatus>,
    pub fit_score: Option<u8>,
}

impl JobPatch {
    /// The single merge implementation; every update path funnels through it.
    pub fn apply(&self, job: &mut JobApplication) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(company) = &self.company {
            job.company = company.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(url) = &self.url {
            job.url = url.clone();
        }
        if let Some(notes) = &self.notes {
            job.notes = notes.clone();
        }
        if let Some(contact_name) = &self.contact_name {
            job.contact_name = Some(contact_name.clone());
        }
        if let Some(contact_email) = &self.contact_email {
            job.contact_email = Some(contact_email.clone());
        }
        if let Some(salary) = &self.salary {
            job.salary = Some(salary.clone());
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(score) = self.fit_score {
            job.fit_score = Some(score);
        }
    }
}
