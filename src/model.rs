// src/model.rs
//! Resume version data structures shared by the store, projection and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skills;

pub const DEFAULT_JOB_CATEGORY: &str = "blue-collar";
pub const DEFAULT_TEMPLATE_KEY: &str = "ats-basic";
pub const DEFAULT_COMMENT_AUTHOR: &str = "Reviewer";

/// Content of one resume snapshot. Everything here is caller-supplied and
/// frozen once the version is appended; empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionContent {
    pub job_category: String,
    pub template_key: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub age: String,
    pub city: String,
    pub languages: String,
    pub education_level: String,
    pub licenses: String,
    pub achievements: String,
    pub linkedin: String,
    pub portfolio: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl Default for VersionContent {
    fn default() -> Self {
        Self {
            job_category: DEFAULT_JOB_CATEGORY.to_string(),
            template_key: DEFAULT_TEMPLATE_KEY.to_string(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: String::new(),
            summary: String::new(),
            skills: Vec::new(),
            age: String::new(),
            city: String::new(),
            languages: String::new(),
            education_level: String::new(),
            licenses: String::new(),
            achievements: String::new(),
            linkedin: String::new(),
            portfolio: String::new(),
            experience: Vec::new(),
            projects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(alias = "jobTitle")]
    pub title: String,
    pub company: String,
    pub duration: String,
    #[serde(alias = "responsibilities")]
    pub description: String,
}

impl ExperienceEntry {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.company.trim().is_empty()
            && self.duration.trim().is_empty()
            && self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
}

impl ProjectEntry {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// One immutable snapshot plus its (append-only) comment list. Comments on
/// a non-latest version are frozen forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeVersion {
    #[serde(flatten)]
    pub content: VersionContent,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// Skills as submitted by a client: either an already-split array or the raw
/// comma-separated text from the builder form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Csv(String),
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::List(Vec::new())
    }
}

impl SkillsInput {
    pub fn entries(&self) -> Vec<String> {
        match self {
            SkillsInput::List(items) => items
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            SkillsInput::Csv(text) => text
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Version payload as accepted on `POST /api/resumes`. Identical to
/// [`VersionContent`] except skills may arrive in either input shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVersionData {
    pub job_category: Option<String>,
    pub template_key: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub summary: String,
    pub skills: SkillsInput,
    pub age: String,
    pub city: String,
    pub languages: String,
    pub education_level: String,
    pub licenses: String,
    pub achievements: String,
    pub linkedin: String,
    pub portfolio: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl NewVersionData {
    /// Build the stored content: manual skills first, then skills inferred
    /// from the summary, de-duplicated first-seen.
    pub fn into_content(self) -> VersionContent {
        let skills = skills::merge(self.skills.entries(), skills::infer(&self.summary));

        VersionContent {
            job_category: self
                .job_category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_JOB_CATEGORY.to_string()),
            template_key: self
                .template_key
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TEMPLATE_KEY.to_string()),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            summary: self.summary,
            skills,
            age: self.age,
            city: self.city,
            languages: self.languages,
            education_level: self.education_level,
            licenses: self.licenses,
            achievements: self.achievements,
            linkedin: self.linkedin,
            portfolio: self.portfolio,
            experience: self.experience,
            projects: self.projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_input_csv_splits_and_trims() {
        let input = SkillsInput::Csv("Driving, Delivery , ,Loading".to_string());
        assert_eq!(input.entries(), vec!["Driving", "Delivery", "Loading"]);
    }

    #[test]
    fn test_skills_input_list_drops_blanks() {
        let input = SkillsInput::List(vec!["React".into(), "  ".into(), " Excel ".into()]);
        assert_eq!(input.entries(), vec!["React", "Excel"]);
    }

    #[test]
    fn test_new_version_defaults_category_and_template() {
        let data: NewVersionData = serde_json::from_str(r#"{"fullName":"Asha Devi"}"#).unwrap();
        let content = data.into_content();
        assert_eq!(content.job_category, DEFAULT_JOB_CATEGORY);
        assert_eq!(content.template_key, DEFAULT_TEMPLATE_KEY);
        assert_eq!(content.full_name, "Asha Devi");
    }

    #[test]
    fn test_experience_aliases_from_builder_payload() {
        let json = r#"{"jobTitle":"Driver","company":"Swiggy","responsibilities":"Daily routes"}"#;
        let entry: ExperienceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "Driver");
        assert_eq!(entry.description, "Daily routes");
    }

    #[test]
    fn test_version_content_round_trips_flat_json() {
        let mut content = VersionContent::default();
        content.full_name = "Asha Devi".to_string();
        content.skills = vec!["Driving".to_string()];

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["fullName"], "Asha Devi");
        assert_eq!(json["jobCategory"], DEFAULT_JOB_CATEGORY);

        let back: VersionContent = serde_json::from_value(json).unwrap();
        assert_eq!(back, content);
    }
}
