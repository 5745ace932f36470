// src/schema.rs
//! Category-driven builder form schema. Each job category maps to an
//! ordered list of field descriptors, so a new category is additive data
//! rather than a new code path. Placeholder prompts adapt to the category
//! but category names themselves are never printed as labels.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Textarea,
    List,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
}

const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        placeholder,
        input: InputKind::Text,
    }
}

const fn textarea(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        placeholder,
        input: InputKind::Textarea,
    }
}

const fn list(name: &'static str, label: &'static str, placeholder: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        placeholder,
        input: InputKind::List,
    }
}

static BLUE_COLLAR_FIELDS: &[FieldDescriptor] = &[
    text("fullName", "Full name", "e.g. Asha Devi"),
    text("phone", "Mobile number", "+91-XXXXXXXXXX"),
    text("city", "City", "e.g. New Delhi"),
    text("role", "Target role", "e.g. Delivery Executive, Retail Associate"),
    textarea(
        "summary",
        "Work summary",
        "Focus on simple, practical details: your years of hands-on work, main tasks (driving, delivery, housekeeping, warehouse, electrician, plumbing, security, construction) and reliability.",
    ),
    list(
        "skills",
        "Skills (comma separated)",
        "e.g. Driving, Navigation, Loading/unloading, Electrical wiring, Plumbing, Safety practices",
    ),
    text("educationLevel", "Education", "e.g. 8th Pass, 10th Pass, 12th Pass"),
    text(
        "licenses",
        "Licenses & certificates",
        "e.g. LMV Driving License, Commercial License, Safety Training Certificate",
    ),
    text(
        "achievements",
        "Achievements",
        "e.g. Best delivery performer, zero-accident record, completed 100+ orders/day",
    ),
];

static GREY_COLLAR_FIELDS: &[FieldDescriptor] = &[
    text("fullName", "Full name", "e.g. Asha Devi"),
    text("email", "Email", "email@example.com"),
    text("phone", "Mobile number", "+91-XXXXXXXXXX"),
    text("city", "City", "e.g. New Delhi"),
    text("role", "Target role", "e.g. Retail Sales Associate"),
    textarea(
        "summary",
        "Work summary",
        "Write a short summary of your customer or field work, communication skills, sales or service targets, and tools you use (POS, billing, basic apps).",
    ),
    list(
        "skills",
        "Skills (comma separated)",
        "e.g. Customer service, Sales closing, POS billing, Field visits, Phone follow-ups, CRM tools",
    ),
    text(
        "educationLevel",
        "Education",
        "e.g. 10th Pass, 12th Pass, Diploma in retail / customer support",
    ),
    text(
        "licenses",
        "Licenses & certificates",
        "e.g. Retail training, Customer service certificate, Basic computer course",
    ),
    text(
        "achievements",
        "Achievements",
        "e.g. Achieved 120% of sales target, Employee of the Month, reduced complaints",
    ),
];

static WHITE_COLLAR_FIELDS: &[FieldDescriptor] = &[
    text("fullName", "Full name", "e.g. Asha Devi"),
    text("email", "Email", "email@example.com"),
    text("phone", "Mobile number", "+91-XXXXXXXXXX"),
    text("city", "City", "e.g. New Delhi"),
    text("role", "Target role", "e.g. Software Engineer, Marketing Executive"),
    text("linkedin", "LinkedIn", "e.g. linkedin.com/in/yourname"),
    text("portfolio", "Portfolio", "e.g. github.com/username or portfolio site"),
    textarea(
        "summary",
        "Professional summary",
        "Summarise your domain expertise, key technical and soft skills, and 1-2 achievements with measurable impact.",
    ),
    list(
        "skills",
        "Skills (comma separated)",
        "e.g. React, Data analysis, Excel, Marketing strategy, Stakeholder management, Leadership",
    ),
    text(
        "educationLevel",
        "Education",
        "e.g. B.Com from Delhi University, B.Tech in CSE, MBA Marketing",
    ),
    text(
        "licenses",
        "Licenses & certificates",
        "e.g. Google Data Analytics, CPA, AWS, MS Office certification",
    ),
    text(
        "achievements",
        "Achievements",
        "e.g. Improved process by 20%, led 5-member team, published 2 papers",
    ),
];

/// Ordered field descriptors for the builder form of a category. Unknown
/// categories get the blue-collar set, matching template fallback.
pub fn fields_for(job_category: &str) -> &'static [FieldDescriptor] {
    match job_category {
        "grey-collar" => GREY_COLLAR_FIELDS,
        "white-collar" => WHITE_COLLAR_FIELDS,
        _ => BLUE_COLLAR_FIELDS,
    }
}

/// Assistive hint rendered in place of the skills list when it is empty.
/// Display-only; never persisted into a version.
pub fn skills_hint(job_category: &str) -> &'static str {
    match job_category {
        "blue-collar" => "Add a few skills - for example: Driving, Loading/unloading, Safety practices.",
        "grey-collar" => "Add your main skills - customer service, sales, or service skills.",
        "white-collar" => "Add your main skills - technical, sales, or service skills.",
        _ => "Add a few skills - for example: Customer service, Cash handling, Inventory.",
    }
}
