//! Content Composer — the canonical Markdown/plain-text rendition of a Record.
//!
//! The exact bytes this module produces are a contract: blank-line placement,
//! heading markup, and the `" | "` contact separator are parsed by other
//! tooling and must not drift. Every section is gated on the Record's
//! dedicated predicate so the heading and body can never disagree.

use crate::models::{description_bullets, Record, SkillCategory};

/// Composes the full Markdown document for a Record.
///
/// Pure and total: any well-formed Record yields a string, and a fully empty
/// Record yields the empty string.
pub fn compose(record: &Record) -> String {
    let mut out = String::new();

    // Personal information block. The blank line after it is emitted whenever
    // the name is present, even if every contact field is empty.
    let info = &record.personal_info;
    if info.has_name() {
        out.push_str(&format!("# {}\n", info.name));

        let mut contact = Vec::new();
        if !info.email.is_empty() {
            contact.push(info.email.clone());
        }
        if !info.phone.is_empty() {
            contact.push(info.phone.clone());
        }
        if !info.linkedin.is_empty() {
            contact.push(format!("LinkedIn: {}", info.linkedin));
        }
        if !info.github.is_empty() {
            contact.push(format!("GitHub: {}", info.github));
        }
        if !contact.is_empty() {
            out.push_str(&contact.join(" | "));
            out.push('\n');
        }
        out.push('\n');
    }

    if record.has_summary() {
        out.push_str(&format!("## Summary\n{}\n\n", info.summary));
    }

    if record.has_education() {
        out.push_str("## Education\n");
        for edu in &record.education {
            out.push_str(&format!("- **{}** in {}\n", edu.degree, edu.major));
            out.push_str(&format!("  {}, {}\n", edu.institution, edu.location));
            out.push_str(&format!("  {} - {}\n", edu.start_date, edu.end_date));
            if let Some(gpa) = &edu.gpa {
                out.push_str(&format!("  GPA: {gpa}\n"));
            }
            out.push('\n');
        }
    }

    if record.has_experience() {
        out.push_str("## Experience\n");
        for exp in &record.experience {
            out.push_str(&format!(
                "- **{}** at {}, {}\n",
                exp.title, exp.company, exp.location
            ));
            out.push_str(&format!("  {} - {}\n", exp.start_date, exp.end_date));
            for line in description_bullets(&exp.description) {
                out.push_str(&format!("  - {line}\n"));
            }
            out.push('\n');
        }
    }

    if record.has_skills() {
        out.push_str("## Skills\n");
        for category in SkillCategory::ALL {
            let list = category.list(&record.skills);
            if !list.is_empty() {
                out.push_str(&format!("**{}:** {}\n", category.label(), list.join(", ")));
            }
        }
        out.push('\n');
    }

    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
