use serde::{Deserialize, Serialize};

/// Contact details and summary for the person the résumé describes.
///
/// Every field defaults to the empty string; `name` gates whether the
/// personal-info block appears in any output at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

impl PersonalInfo {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One entry in the ordered education list.
///
/// Dates are free-form strings (conventionally `YYYY-MM` or `Present`);
/// `gpa` is the only genuinely nullable field in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub major: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

/// One entry in the ordered experience list.
///
/// `description` is a free-text block where newline characters delimit
/// semantic bullet points — see [`description_bullets`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Three independent ordered skill lists. Duplicates are permitted — no
/// dedup guarantee anywhere in the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

/// The three skill categories, in their fixed emission order.
///
/// Replaces runtime string-keyed dispatch: each category maps to exactly one
/// list field and one display label via the match tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

impl SkillCategory {
    /// Fixed emission order: technical → soft → languages.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Languages,
    ];

    /// Display label used by every output format.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Languages => "Languages",
        }
    }

    /// The list this category selects out of [`Skills`].
    pub fn list<'a>(&self, skills: &'a Skills) -> &'a [String] {
        match self {
            SkillCategory::Technical => &skills.technical,
            SkillCategory::Soft => &skills.soft,
            SkillCategory::Languages => &skills.languages,
        }
    }
}

/// The in-memory aggregate passed read-only to the composer and both
/// renderers. Created empty, mutated field-by-field by the owning caller,
/// never retained across render calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
}

impl Record {
    /// Section predicates — evaluated once per render and used to gate BOTH
    /// the heading and the body of each section, so the two can never drift.
    pub fn has_summary(&self) -> bool {
        !self.personal_info.summary.is_empty()
    }

    pub fn has_education(&self) -> bool {
        !self.education.is_empty()
    }

    pub fn has_experience(&self) -> bool {
        !self.experience.is_empty()
    }

    pub fn has_skills(&self) -> bool {
        SkillCategory::ALL
            .iter()
            .any(|c| !c.list(&self.skills).is_empty())
    }
}

/// Splits an experience description into its semantic bullet points:
/// one bullet per newline-delimited line, trimmed of surrounding whitespace,
/// blank lines dropped, original order preserved.
///
/// All three output formats share this rule.
pub fn description_bullets(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
