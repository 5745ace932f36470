// src/skills.rs
//! Keyword-based skill inference from free-text summaries.
//!
//! The trigger table is fixed content: adding a row changes what gets
//! suggested, not how inference behaves. Scanning is case-insensitive,
//! output order follows declaration order, duplicates are dropped.

/// (substring triggers, skill label) in declaration order.
const SKILL_TRIGGERS: &[(&[&str], &str)] = &[
    // Blue / grey collar
    (&["electric"], "Electrical work"),
    (&["wiring"], "Wiring"),
    (&["ac repair", "air conditioner"], "AC repair"),
    (&["plumb"], "Plumbing"),
    (&["driver", "driving"], "Driving"),
    (&["delivery"], "Delivery"),
    (&["warehouse", "inventory"], "Inventory management"),
    (&["welding"], "Welding"),
    // White collar / tech
    (&["javascript"], "JavaScript"),
    (&["react"], "React"),
    (&["node"], "Node.js"),
    (&["mongo"], "MongoDB"),
    (&["frontend", "front-end"], "Frontend development"),
    (&["backend", "back-end"], "Backend development"),
    // Generic soft skills
    (&["team", "collaborat"], "Teamwork"),
    (&["customer", "client"], "Customer handling"),
    (&["communication"], "Communication"),
    (&["lead", "supervis"], "Leadership"),
];

/// Scan a summary for trigger substrings and return the matched labels.
/// Deterministic and idempotent: same text always yields the same list.
pub fn infer(summary: &str) -> Vec<String> {
    if summary.trim().is_empty() {
        return Vec::new();
    }
    let text = summary.to_lowercase();

    let mut matched = Vec::new();
    for (triggers, label) in SKILL_TRIGGERS {
        if triggers.iter().any(|t| text.contains(t)) && !matched.iter().any(|m| m == label) {
            matched.push((*label).to_string());
        }
    }
    matched
}

/// Union manual entries with inferred labels, de-duplicated first-seen so
/// manual entries keep priority.
pub fn merge(manual: Vec<String>, inferred: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for skill in manual.into_iter().chain(inferred) {
        if !merged.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
            merged.push(skill);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_matches_in_declaration_order() {
        let skills = infer("I handle customer calls and do electrical wiring on site");
        assert_eq!(skills, vec!["Electrical work", "Wiring", "Customer handling"]);
    }

    #[test]
    fn test_infer_is_case_insensitive() {
        assert_eq!(infer("REACT and Node developer"), vec!["React", "Node.js"]);
    }

    #[test]
    fn test_infer_is_idempotent_and_deterministic() {
        let summary = "Team lead for delivery drivers, client follow-ups";
        let first = infer(summary);
        let second = infer(summary);
        assert_eq!(first, second);
        // "driver" and "driving" both hit the same row exactly once
        assert_eq!(first.iter().filter(|s| *s == "Driving").count(), 1);
    }

    #[test]
    fn test_infer_empty_summary() {
        assert!(infer("").is_empty());
        assert!(infer("   ").is_empty());
    }

    #[test]
    fn test_merge_manual_entries_win() {
        let merged = merge(
            vec!["Driving".to_string(), "Delivery".to_string()],
            vec!["Delivery".to_string(), "Teamwork".to_string()],
        );
        assert_eq!(merged, vec!["Driving", "Delivery", "Teamwork"]);
    }

    #[test]
    fn test_merge_dedupes_case_insensitively() {
        let merged = merge(vec!["driving".to_string()], vec!["Driving".to_string()]);
        assert_eq!(merged, vec!["driving"]);
    }
}
