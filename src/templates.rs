// src/templates.rs
//! Static template registry: (job category, template key) -> visual
//! parameters. Lookup is total; unknown categories fall back to
//! "blue-collar", unknown keys to "ats-basic" within the category.
//! Colors and section ordering drive layout only and are never shown
//! as category labels to end users.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Licenses,
    Achievements,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
            SectionKind::Licenses => "Licenses & Certificates",
            SectionKind::Achievements => "Achievements",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub display_name: &'static str,
    pub description: &'static str,
    pub accent_color: &'static str,
    pub border_color: &'static str,
    pub header_background: &'static str,
    pub sections: &'static [SectionKind],
}

pub const JOB_CATEGORIES: [&str; 3] = ["blue-collar", "grey-collar", "white-collar"];
pub const TEMPLATE_KEYS: [&str; 3] = ["ats-basic", "modern-flex", "compact"];

use SectionKind::*;

const SKILLS_FIRST: &[SectionKind] = &[
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Licenses,
    Achievements,
];
const EXPERIENCE_FIRST: &[SectionKind] = &[
    Summary,
    Experience,
    Projects,
    Skills,
    Education,
    Licenses,
    Achievements,
];
const SKILLS_LAST: &[SectionKind] = &[
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
    Licenses,
    Achievements,
];

static BLUE_COLLAR: [(&str, TemplateDescriptor); 3] = [
    (
        "ats-basic",
        TemplateDescriptor {
            display_name: "Blue-collar ATS",
            description: "Skills and experience highlighted first, 1-page layout.",
            accent_color: "#22c55e",
            border_color: "rgba(34, 197, 94, 0.7)",
            header_background: "#111827",
            sections: SKILLS_FIRST,
        },
    ),
    (
        "modern-flex",
        TemplateDescriptor {
            display_name: "Blue-collar Modern",
            description: "Bolder headings, more whitespace, still ATS-safe.",
            accent_color: "#10b981",
            border_color: "rgba(16, 185, 129, 0.7)",
            header_background: "#020617",
            sections: EXPERIENCE_FIRST,
        },
    ),
    (
        "compact",
        TemplateDescriptor {
            display_name: "Blue-collar Compact",
            description: "Very tight 1-page version for quick scans.",
            accent_color: "#0ea5e9",
            border_color: "rgba(14, 165, 233, 0.7)",
            header_background: "#020617",
            sections: SKILLS_FIRST,
        },
    ),
];

static GREY_COLLAR: [(&str, TemplateDescriptor); 3] = [
    (
        "ats-basic",
        TemplateDescriptor {
            display_name: "Service ATS",
            description: "Field + customer work, with clear dates and locations.",
            accent_color: "#6366f1",
            border_color: "rgba(99, 102, 241, 0.7)",
            header_background: "#020617",
            sections: EXPERIENCE_FIRST,
        },
    ),
    (
        "modern-flex",
        TemplateDescriptor {
            display_name: "Service Modern",
            description: "Modern card feel, emphasis on responsibilities.",
            accent_color: "#a855f7",
            border_color: "rgba(168, 85, 247, 0.7)",
            header_background: "#020617",
            sections: EXPERIENCE_FIRST,
        },
    ),
    (
        "compact",
        TemplateDescriptor {
            display_name: "Service Compact",
            description: "When you want to fit 2-3 roles on one page.",
            accent_color: "#f97316",
            border_color: "rgba(249, 115, 22, 0.7)",
            header_background: "#020617",
            sections: SKILLS_LAST,
        },
    ),
];

static WHITE_COLLAR: [(&str, TemplateDescriptor); 3] = [
    (
        "ats-basic",
        TemplateDescriptor {
            display_name: "Office ATS",
            description: "Classic single-column, recruiter-style layout.",
            accent_color: "#2563eb",
            border_color: "rgba(37, 99, 235, 0.7)",
            header_background: "#111827",
            sections: SKILLS_LAST,
        },
    ),
    (
        "modern-flex",
        TemplateDescriptor {
            display_name: "Office Modern",
            description: "More visual hierarchy, ideal for corporate roles.",
            accent_color: "#7c3aed",
            border_color: "rgba(124, 58, 237, 0.7)",
            header_background: "#020617",
            sections: EXPERIENCE_FIRST,
        },
    ),
    (
        "compact",
        TemplateDescriptor {
            display_name: "Office Compact",
            description: "Very compact, useful for senior profiles.",
            accent_color: "#facc15",
            border_color: "rgba(250, 204, 21, 0.7)",
            header_background: "#020617",
            sections: EXPERIENCE_FIRST,
        },
    ),
];

fn category_table(job_category: &str) -> &'static [(&'static str, TemplateDescriptor); 3] {
    match job_category {
        "grey-collar" => &GREY_COLLAR,
        "white-collar" => &WHITE_COLLAR,
        _ => &BLUE_COLLAR,
    }
}

/// Total lookup with two-level fallback. Never fails.
pub fn resolve(job_category: &str, template_key: &str) -> &'static TemplateDescriptor {
    let table = category_table(job_category);
    table
        .iter()
        .find(|(key, _)| *key == template_key)
        .or_else(|| table.iter().find(|(key, _)| *key == "ats-basic"))
        .map(|(_, descriptor)| descriptor)
        .expect("every category table carries an ats-basic entry")
}

/// Full catalog, used by the template gallery endpoint.
pub fn catalog() -> Vec<(&'static str, &'static str, &'static TemplateDescriptor)> {
    let mut entries = Vec::with_capacity(JOB_CATEGORIES.len() * TEMPLATE_KEYS.len());
    for category in JOB_CATEGORIES {
        for (key, descriptor) in category_table(category) {
            entries.push((category, *key, descriptor));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_pair() {
        let descriptor = resolve("white-collar", "modern-flex");
        assert_eq!(descriptor.display_name, "Office Modern");
    }

    #[test]
    fn test_resolve_unknown_category_falls_back_to_blue_collar() {
        let descriptor = resolve("pink-collar", "compact");
        assert_eq!(descriptor.display_name, "Blue-collar Compact");
    }

    #[test]
    fn test_resolve_unknown_everything_falls_back_to_blue_collar_ats() {
        let descriptor = resolve("unknown-category", "unknown-key");
        assert_eq!(descriptor.display_name, "Blue-collar ATS");
    }

    #[test]
    fn test_every_descriptor_orders_all_sections() {
        for (_, _, descriptor) in catalog() {
            assert_eq!(descriptor.sections.len(), 7);
            assert_eq!(descriptor.sections[0], SectionKind::Summary);
        }
    }

    #[test]
    fn test_catalog_covers_all_pairs() {
        assert_eq!(catalog().len(), 9);
    }
}
