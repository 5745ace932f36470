// src/projection.rs
//! Projects one resume version into a rendering-agnostic list of sections.
//!
//! The same projection feeds the interactive preview and the PDF export so
//! the two can never drift apart. Template keys change arrangement and
//! density hints only; the content of every section is identical across
//! layouts.

use serde::Serialize;

use crate::model::{ResumeVersion, VersionContent};
use crate::schema;
use crate::templates::{SectionKind, TemplateDescriptor};

/// Preview keeps assistive placeholders for blank fields; Document output
/// (PDF, public profile) omits empty fields without placeholder text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Full,
    Half,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    pub initials: String,
    pub full_name: String,
    pub role: String,
    pub contact_parts: Vec<String>,
    pub link_parts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryBlock {
    pub heading: String,
    pub subheading: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SectionBody {
    Paragraph { text: String },
    Chips { skills: Vec<String>, hint: Option<String> },
    Entries { entries: Vec<EntryBlock> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub section: SectionKind,
    pub title: &'static str,
    pub placement: Placement,
    pub dense: bool,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub header: HeaderBlock,
    pub sections: Vec<RenderedSection>,
}

/// Initials badge: first letters of up to the first two name tokens,
/// upper-cased, "U" when the name is absent.
pub fn initials(full_name: &str) -> String {
    let badge: String = full_name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();

    if badge.is_empty() {
        "U".to_string()
    } else {
        badge
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn header_block(content: &VersionContent) -> HeaderBlock {
    let contact_parts = [&content.email, &content.phone, &content.city]
        .into_iter()
        .filter_map(|v| non_empty(v))
        .collect();
    let link_parts = [&content.linkedin, &content.portfolio]
        .into_iter()
        .filter_map(|v| non_empty(v))
        .collect();

    HeaderBlock {
        initials: initials(&content.full_name),
        full_name: content.full_name.trim().to_string(),
        role: content.role.trim().to_string(),
        contact_parts,
        link_parts,
    }
}

fn experience_entries(content: &VersionContent, mode: RenderMode) -> Vec<EntryBlock> {
    content
        .experience
        .iter()
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let heading = match (non_empty(&entry.title), mode) {
                (Some(title), _) => title,
                (None, RenderMode::Preview) => "Job title".to_string(),
                (None, RenderMode::Document) => String::new(),
            };
            let subheading = [&entry.company, &entry.duration]
                .into_iter()
                .filter_map(|v| non_empty(v))
                .collect::<Vec<_>>()
                .join(" · ");
            EntryBlock {
                heading,
                subheading,
                body: entry.description.trim().to_string(),
            }
        })
        .collect()
}

fn project_entries(content: &VersionContent, mode: RenderMode) -> Vec<EntryBlock> {
    content
        .projects
        .iter()
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let heading = match (non_empty(&entry.name), mode) {
                (Some(name), _) => name,
                (None, RenderMode::Preview) => "Project name".to_string(),
                (None, RenderMode::Document) => String::new(),
            };
            EntryBlock {
                heading,
                subheading: String::new(),
                body: entry.description.trim().to_string(),
            }
        })
        .collect()
}

fn section_body(
    kind: SectionKind,
    content: &VersionContent,
    mode: RenderMode,
) -> Option<SectionBody> {
    match kind {
        SectionKind::Summary => {
            non_empty(&content.summary).map(|text| SectionBody::Paragraph { text })
        }
        SectionKind::Skills => {
            let skills: Vec<String> = content
                .skills
                .iter()
                .filter_map(|s| non_empty(s))
                .collect();
            if !skills.is_empty() {
                Some(SectionBody::Chips { skills, hint: None })
            } else if mode == RenderMode::Preview {
                Some(SectionBody::Chips {
                    skills: Vec::new(),
                    hint: Some(schema::skills_hint(&content.job_category).to_string()),
                })
            } else {
                None
            }
        }
        SectionKind::Experience => {
            let entries = experience_entries(content, mode);
            if entries.is_empty() {
                None
            } else {
                Some(SectionBody::Entries { entries })
            }
        }
        SectionKind::Projects => {
            let entries = project_entries(content, mode);
            if entries.is_empty() {
                None
            } else {
                Some(SectionBody::Entries { entries })
            }
        }
        SectionKind::Education => {
            non_empty(&content.education_level).map(|text| SectionBody::Paragraph { text })
        }
        SectionKind::Licenses => {
            non_empty(&content.licenses).map(|text| SectionBody::Paragraph { text })
        }
        SectionKind::Achievements => {
            non_empty(&content.achievements).map(|text| SectionBody::Paragraph { text })
        }
    }
}

fn placement_for(kind: SectionKind, template_key: &str) -> Placement {
    // modern-flex puts summary and skills side by side; experience and the
    // rest span the full width. Other layouts stack everything.
    if template_key == "modern-flex"
        && matches!(kind, SectionKind::Summary | SectionKind::Skills)
    {
        Placement::Half
    } else {
        Placement::Full
    }
}

/// Map one version + resolved template into ordered, populated sections.
pub fn project(
    version: &ResumeVersion,
    descriptor: &TemplateDescriptor,
    mode: RenderMode,
) -> Projection {
    let content = &version.content;
    let dense = content.template_key == "compact";

    let sections = descriptor
        .sections
        .iter()
        .filter_map(|&kind| {
            section_body(kind, content, mode).map(|body| RenderedSection {
                section: kind,
                title: kind.title(),
                placement: placement_for(kind, &content.template_key),
                dense,
                body,
            })
        })
        .collect();

    Projection {
        header: header_block(content),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExperienceEntry, ProjectEntry};
    use crate::templates;
    use chrono::Utc;

    fn version(content: VersionContent) -> ResumeVersion {
        ResumeVersion {
            content,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn sample_content() -> VersionContent {
        VersionContent {
            full_name: "Asha Devi".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            role: "Delivery Executive".to_string(),
            summary: "Two years of delivery work".to_string(),
            skills: vec!["Driving".to_string(), "Delivery".to_string()],
            experience: vec![ExperienceEntry {
                title: "Driver".to_string(),
                company: "Swiggy".to_string(),
                duration: "2022-2024".to_string(),
                description: "Daily delivery routes".to_string(),
            }],
            ..VersionContent::default()
        }
    }

    #[test]
    fn test_initials_badge() {
        assert_eq!(initials("Asha Devi"), "AD");
        assert_eq!(initials("Asha Devi Kumari"), "AD");
        assert_eq!(initials("asha"), "A");
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }

    #[test]
    fn test_sections_follow_descriptor_order() {
        let v = version(sample_content());
        let descriptor = templates::resolve("blue-collar", "ats-basic");
        let projection = project(&v, descriptor, RenderMode::Document);

        let kinds: Vec<SectionKind> = projection.sections.iter().map(|s| s.section).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Summary,
                SectionKind::Skills,
                SectionKind::Experience
            ]
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let v = version(VersionContent::default());
        let descriptor = templates::resolve("blue-collar", "ats-basic");
        let projection = project(&v, descriptor, RenderMode::Document);
        assert!(projection.sections.is_empty());
    }

    #[test]
    fn test_preview_keeps_skills_hint_when_empty() {
        let mut content = sample_content();
        content.skills.clear();
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "ats-basic");

        let preview = project(&v, descriptor, RenderMode::Preview);
        let skills = preview
            .sections
            .iter()
            .find(|s| s.section == SectionKind::Skills)
            .expect("preview keeps the skills section");
        match &skills.body {
            SectionBody::Chips { skills, hint } => {
                assert!(skills.is_empty());
                assert!(hint.is_some());
            }
            other => panic!("unexpected body: {other:?}"),
        }

        let document = project(&v, descriptor, RenderMode::Document);
        assert!(!document
            .sections
            .iter()
            .any(|s| s.section == SectionKind::Skills));
    }

    #[test]
    fn test_blank_experience_title_fallback_only_in_preview() {
        let mut content = sample_content();
        content.experience = vec![ExperienceEntry {
            title: String::new(),
            company: "Swiggy".to_string(),
            duration: String::new(),
            description: String::new(),
        }];
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "ats-basic");

        let grab = |mode| {
            let p = project(&v, descriptor, mode);
            p.sections
                .iter()
                .find(|s| s.section == SectionKind::Experience)
                .and_then(|s| match &s.body {
                    SectionBody::Entries { entries } => Some(entries[0].clone()),
                    _ => None,
                })
                .unwrap()
        };

        assert_eq!(grab(RenderMode::Preview).heading, "Job title");
        assert_eq!(grab(RenderMode::Document).heading, "");
    }

    #[test]
    fn test_all_blank_experience_omits_section() {
        let mut content = sample_content();
        content.experience = vec![ExperienceEntry::default()];
        content.projects = vec![ProjectEntry::default()];
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "ats-basic");

        let projection = project(&v, descriptor, RenderMode::Preview);
        assert!(!projection
            .sections
            .iter()
            .any(|s| s.section == SectionKind::Experience));
        assert!(!projection
            .sections
            .iter()
            .any(|s| s.section == SectionKind::Projects));
    }

    #[test]
    fn test_modern_flex_layout_hints() {
        let mut content = sample_content();
        content.template_key = "modern-flex".to_string();
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "modern-flex");

        let projection = project(&v, descriptor, RenderMode::Preview);
        for section in &projection.sections {
            let expected = match section.section {
                SectionKind::Summary | SectionKind::Skills => Placement::Half,
                _ => Placement::Full,
            };
            assert_eq!(section.placement, expected);
            assert!(!section.dense);
        }
    }

    #[test]
    fn test_compact_sets_dense_hint() {
        let mut content = sample_content();
        content.template_key = "compact".to_string();
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "compact");

        let projection = project(&v, descriptor, RenderMode::Preview);
        assert!(projection.sections.iter().all(|s| s.dense));
    }

    #[test]
    fn test_content_identical_across_template_keys() {
        let descriptor_a = templates::resolve("blue-collar", "ats-basic");
        let descriptor_b = templates::resolve("blue-collar", "modern-flex");

        let v_a = version(sample_content());
        let mut content_b = sample_content();
        content_b.template_key = "modern-flex".to_string();
        let v_b = version(content_b);

        let text = |projection: &Projection| {
            let mut out: Vec<String> = Vec::new();
            for section in &projection.sections {
                match &section.body {
                    SectionBody::Paragraph { text } => out.push(text.clone()),
                    SectionBody::Chips { skills, .. } => out.extend(skills.iter().cloned()),
                    SectionBody::Entries { entries } => {
                        out.extend(entries.iter().map(|e| e.heading.clone()))
                    }
                }
            }
            out.sort();
            out
        };

        let a = project(&v_a, descriptor_a, RenderMode::Document);
        let b = project(&v_b, descriptor_b, RenderMode::Document);
        assert_eq!(text(&a), text(&b));
    }

    #[test]
    fn test_header_contact_and_links() {
        let mut content = sample_content();
        content.city = "New Delhi".to_string();
        content.linkedin = "linkedin.com/in/asha".to_string();
        let v = version(content);
        let descriptor = templates::resolve("blue-collar", "ats-basic");

        let header = project(&v, descriptor, RenderMode::Document).header;
        assert_eq!(
            header.contact_parts,
            vec!["asha@example.com", "9876543210", "New Delhi"]
        );
        assert_eq!(header.link_parts, vec!["linkedin.com/in/asha"]);
        assert_eq!(header.initials, "AD");
    }
}
