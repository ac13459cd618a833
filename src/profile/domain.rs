use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for experience and education entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One role in the candidate's work history. Dates are free-form display
/// strings, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_role: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_role: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current_role: Option<bool>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    pub fn apply(&self, experience: &mut Experience) {
        if let Some(company) = &self.company {
            experience.company = company.clone();
        }
        if let Some(title) = &self.title {
            experience.title = title.clone();
        }
        if let Some(start_date) = &self.start_date {
            experience.start_date = start_date.clone();
        }
        if let Some(end_date) = &self.end_date {
            experience.end_date = end_date.clone();
        }
        if let Some(is_current_role) = self.is_current_role {
            experience.is_current_role = is_current_role;
        }
        if let Some(description) = &self.description {
            experience.description = description.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EducationPatch {
    pub fn apply(&self, education: &mut Education) {
        if let Some(institution) = &self.institution {
            education.institution = institution.clone();
        }
        if let Some(degree) = &self.degree {
            education.degree = degree.clone();
        }
        if let Some(field) = &self.field {
            education.field = field.clone();
        }
        if let Some(start_date) = &self.start_date {
            education.start_date = start_date.clone();
        }
        if let Some(end_date) = &self.end_date {
            education.end_date = end_date.clone();
        }
    }
}

/// Partial merge for the scalar profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFieldsPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
}

impl ProfileFieldsPatch {
    pub fn apply(&self, profile: &mut CandidateProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(location) = &self.location {
            profile.location = location.clone();
        }
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(summary) = &self.summary {
            profile.summary = summary.clone();
        }
    }
}

/// The user's resume-relevant data. Experience and education keep insertion
/// order; skills are insertion-ordered and duplicate-free (case-sensitive
/// exact match is the dedup key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl CandidateProfile {
    /// Render the profile into the candidate text consumed by the fit
    /// scorer: one line per scalar field, then flattened experience,
    /// education, and skill sections.
    pub fn resume_text(&self) -> String {
        let experience_text = self
            .experiences
            .iter()
            .map(|exp| {
                let end = if exp.is_current_role {
                    "Present"
                } else {
                    exp.end_date.as_str()
                };
                format!(
                    "{} at {} ({} - {}): {}",
                    exp.title, exp.company, exp.start_date, end, exp.description
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let education_text = self
            .education
            .iter()
            .map(|edu| {
                format!(
                    "{} in {} from {} ({} - {})",
                    edu.degree, edu.field, edu.institution, edu.start_date, edu.end_date
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let skills_text = self.skills.join(" ");

        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.name, self.title, self.summary, experience_text, education_text, skills_text
        )
    }
}
