//! Flow-Document Renderer — Office Open XML output via docx-rs.
//!
//! Builds a sequence of heading/paragraph blocks with no explicit page
//! geometry; pagination is left to the consuming viewer. Structure and
//! ordering mirror the composer exactly; spacing paragraphs are cosmetic and
//! not contractual.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
};
use tracing::debug;

use crate::errors::ExportError;
use crate::models::{description_bullets, Record, SkillCategory};

/// Default body font and size (half-points): Calibri 12 pt.
const BODY_FONT: &str = "Calibri";
const BODY_SIZE: usize = 24;
/// Document title: 24 pt bold, centered.
const TITLE_SIZE: usize = 48;
/// Section headings: 14 pt bold.
const HEADING_SIZE: usize = 28;

/// Numbering id wired to the single bullet-list definition.
const BULLET_NUMBERING: usize = 2;

fn heading(text: &str) -> Paragraph {
    Paragraph::new()
        .style("SectionHeading")
        .add_run(Run::new().add_text(text))
}

fn body_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn spacer() -> Paragraph {
    Paragraph::new()
}

/// An emphasized entry line: bold lead run, plain remainder.
fn emphasized_line(lead: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(lead).bold())
        .add_run(Run::new().add_text(rest))
}

fn bullet_item(text: &str) -> Paragraph {
    Paragraph::new()
        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
        .add_run(Run::new().add_text(text))
}

/// Renders a Record as a flow-style DOCX document.
pub fn render_docx(record: &Record) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(BODY_FONT))
        .default_size(BODY_SIZE)
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(TITLE_SIZE)
                .bold(),
        )
        .add_style(
            Style::new("SectionHeading", StyleType::Paragraph)
                .name("Section Heading")
                .size(HEADING_SIZE)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(
                Level::new(
                    0,
                    Start::new(0),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(420), Some(SpecialIndentType::Hanging(420)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    let info = &record.personal_info;
    if info.has_name() {
        docx = docx.add_paragraph(
            Paragraph::new()
                .style("Title")
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(info.name.as_str())),
        );

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
            docx = docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(Run::new().add_text(contact.join(" | "))),
            );
        }
        docx = docx.add_paragraph(spacer());
    }

    if record.has_summary() {
        docx = docx
            .add_paragraph(heading("Summary"))
            .add_paragraph(body_paragraph(info.summary.as_str()))
            .add_paragraph(spacer());
    }

    if record.has_education() {
        docx = docx.add_paragraph(heading("Education"));
        for edu in &record.education {
            docx = docx
                .add_paragraph(emphasized_line(
                    edu.degree.as_str(),
                    &format!(" in {}", edu.major),
                ))
                .add_paragraph(body_paragraph(&format!(
                    "{}, {}",
                    edu.institution, edu.location
                )))
                .add_paragraph(body_paragraph(&format!(
                    "{} - {}",
                    edu.start_date, edu.end_date
                )));
            if let Some(gpa) = &edu.gpa {
                docx = docx.add_paragraph(body_paragraph(&format!("GPA: {gpa}")));
            }
            docx = docx.add_paragraph(spacer());
        }
    }

    if record.has_experience() {
        docx = docx.add_paragraph(heading("Experience"));
        for exp in &record.experience {
            docx = docx
                .add_paragraph(emphasized_line(
                    exp.title.as_str(),
                    &format!(" at {}, {}", exp.company, exp.location),
                ))
                .add_paragraph(body_paragraph(&format!(
                    "{} - {}",
                    exp.start_date, exp.end_date
                )));
            for line in description_bullets(&exp.description) {
                docx = docx.add_paragraph(bullet_item(line));
            }
            docx = docx.add_paragraph(spacer());
        }
    }

    if record.has_skills() {
        docx = docx.add_paragraph(heading("Skills"));
        for category in SkillCategory::ALL {
            let list = category.list(&record.skills);
            if !list.is_empty() {
                docx = docx.add_paragraph(emphasized_line(
                    &format!("{}: ", category.label()),
                    &list.join(", "),
                ));
            }
        }
        docx = docx.add_paragraph(spacer());
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    let bytes = cursor.into_inner();
    debug!(bytes = bytes.len(), "docx assembly complete");
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
