//! Paginated-Layout Renderer — A4 PDF output via printpdf.
//!
//! Maps the same section structure as the composer onto a fixed page model:
//! A4, 20 mm margins, a small set of named paragraph styles with fixed font
//! constants. Section headings are underlined by a full-width rule; an
//! entry's heading lines are kept together on one page while an experience
//! entry's bullet list may flow across a page break.
//!
//! Never fails for a schema-valid Record — an empty Record still produces a
//! minimal valid single-page document.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use tracing::debug;

use crate::errors::ExportError;
use crate::layout::{a4_page_config, metrics, wrap_words, Face, PageConfig, PT_TO_MM};
use crate::models::{description_bullets, Record, SkillCategory};

// ────────────────────────────────────────────────────────────────────────────
// Paragraph styles
// ────────────────────────────────────────────────────────────────────────────

/// A named paragraph style: face, size, line leading, trailing space.
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    face: Face,
    size_pt: f32,
    leading_pt: f32,
    space_after_mm: f32,
}

impl TextStyle {
    fn leading_mm(&self) -> f32 {
        self.leading_pt * PT_TO_MM
    }
}

const NAME: TextStyle = TextStyle {
    face: Face::HelveticaBold,
    size_pt: 28.0,
    leading_pt: 32.0,
    space_after_mm: 2.0,
};

const CONTACT: TextStyle = TextStyle {
    face: Face::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    space_after_mm: 8.0,
};

const SECTION_TITLE: TextStyle = TextStyle {
    face: Face::HelveticaBold,
    size_pt: 16.0,
    leading_pt: 18.0,
    space_after_mm: 4.0,
};

const SUBHEAD_BOLD: TextStyle = TextStyle {
    face: Face::HelveticaBold,
    size_pt: 12.0,
    leading_pt: 14.0,
    space_after_mm: 1.0,
};

const SUBHEAD_PLAIN: TextStyle = TextStyle {
    face: Face::Helvetica,
    size_pt: 12.0,
    leading_pt: 14.0,
    space_after_mm: 1.0,
};

const DATE_LOCATION: TextStyle = TextStyle {
    face: Face::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    space_after_mm: 4.0,
};

const BODY: TextStyle = TextStyle {
    face: Face::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    space_after_mm: 4.0,
};

const BULLET: TextStyle = TextStyle {
    face: Face::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    space_after_mm: 0.5,
};

/// Vertical gap before every section heading.
const SECTION_SPACE_BEFORE_MM: f32 = 10.0;
/// Gap between the heading rule and the section body.
const RULE_SPACE_AFTER_MM: f32 = 2.0;
/// Indent of the bullet glyph from the left margin.
const BULLET_GLYPH_INDENT_MM: f32 = 2.0;
/// Indent of bullet text (and its wrapped continuation lines).
const BULLET_TEXT_INDENT_MM: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

// ────────────────────────────────────────────────────────────────────────────
// Page writer
// ────────────────────────────────────────────────────────────────────────────

/// Cursor-based writer over a growing printpdf document. `y_mm` is the
/// baseline of the last written line; it moves down the page and resets on
/// every page break.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    config: PageConfig,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y_mm: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, ExportError> {
        let config = a4_page_config();
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(config.page_width_mm),
            Mm(config.page_height_mm),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            config,
            regular,
            bold,
            y_mm: config.top_mm(),
            pages: 1,
        })
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Helvetica => &self.regular,
            Face::HelveticaBold => &self.bold,
        }
    }

    fn break_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(self.config.page_width_mm),
            Mm(self.config.page_height_mm),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = self.config.top_mm();
        self.pages += 1;
    }

    /// Breaks the page unless `needed_mm` of vertical room remains.
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm - needed_mm < self.config.bottom_mm() {
            self.break_page();
        }
    }

    /// Writes one physical line at the given x, advancing by the style's
    /// leading first (page-breaking if the line would not fit).
    fn draw_line_at(&mut self, text: &str, style: &TextStyle, x_mm: f32) {
        self.ensure_room(style.leading_mm());
        self.y_mm -= style.leading_mm();
        self.layer.use_text(
            text,
            style.size_pt,
            Mm(x_mm),
            Mm(self.y_mm),
            self.font(style.face),
        );
    }

    /// Wrapped paragraph across the full text column.
    fn paragraph(&mut self, text: &str, style: &TextStyle, align: Align) {
        let width = self.config.text_width_mm();
        for line in wrap_words(text, style.face, style.size_pt, width) {
            let x = match align {
                Align::Left => self.config.left_mm(),
                Align::Center => self.centered_x(&line, style),
            };
            self.draw_line_at(&line, style, x);
        }
        self.y_mm -= style.space_after_mm;
    }

    fn centered_x(&self, line: &str, style: &TextStyle) -> f32 {
        let line_mm = metrics(style.face).width_mm(line, style.size_pt);
        self.config.left_mm() + ((self.config.text_width_mm() - line_mm) / 2.0).max(0.0)
    }

    /// A paragraph whose first run is a bold label, with the remaining text
    /// flowing after it on the same line and wrapping at full column width.
    fn labeled_paragraph(&mut self, label: &str, text: &str, style: &TextStyle) {
        let label_style = TextStyle {
            face: Face::HelveticaBold,
            ..*style
        };
        let label_mm = metrics(label_style.face).width_mm(label, label_style.size_pt);
        let space_mm =
            metrics(style.face).space_width * style.size_pt * PT_TO_MM;

        // First line: label, then as many words as fit beside it.
        let mut words = text.split_whitespace().peekable();
        let mut first_line = String::new();
        let mut used_mm = self.config.left_mm() + label_mm + space_mm;
        while let Some(word) = words.peek() {
            let word_mm = metrics(style.face).width_mm(word, style.size_pt);
            let sep = if first_line.is_empty() { 0.0 } else { space_mm };
            if used_mm + sep + word_mm > self.config.right_mm() && !first_line.is_empty() {
                break;
            }
            if !first_line.is_empty() {
                first_line.push(' ');
            }
            first_line.push_str(word);
            used_mm += sep + word_mm;
            words.next();
        }

        self.ensure_room(style.leading_mm());
        self.y_mm -= style.leading_mm();
        self.layer.use_text(
            label,
            label_style.size_pt,
            Mm(self.config.left_mm()),
            Mm(self.y_mm),
            self.font(label_style.face),
        );
        self.layer.use_text(
            first_line.as_str(),
            style.size_pt,
            Mm(self.config.left_mm() + label_mm + space_mm),
            Mm(self.y_mm),
            self.font(style.face),
        );

        // Continuation lines wrap at full column width.
        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            for line in wrap_words(
                &rest.join(" "),
                style.face,
                style.size_pt,
                self.config.text_width_mm(),
            ) {
                self.draw_line_at(&line, style, self.config.left_mm());
            }
        }
        self.y_mm -= style.space_after_mm;
    }

    /// Full-width horizontal rule under a section heading.
    fn rule(&mut self) {
        self.ensure_room(1.0 + RULE_SPACE_AFTER_MM);
        self.y_mm -= 1.0;
        let line = Line {
            points: vec![
                (
                    Point::new(
                        Mm(self.config.left_mm()),
                        Mm(self.y_mm),
                    ),
                    false,
                ),
                (
                    Point::new(
                        Mm(self.config.right_mm()),
                        Mm(self.y_mm),
                    ),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(1.0);
        self.layer.add_line(line);
        self.y_mm -= RULE_SPACE_AFTER_MM;
    }

    fn spacer(&mut self, mm: f32) {
        self.y_mm -= mm;
    }

    /// Section heading: gap, title, rule. Kept together with room for at
    /// least one following body line so a heading never strands at a page
    /// bottom.
    fn section_heading(&mut self, title: &str) {
        let needed = SECTION_SPACE_BEFORE_MM
            + SECTION_TITLE.leading_mm()
            + SECTION_TITLE.space_after_mm
            + 1.0
            + RULE_SPACE_AFTER_MM
            + BODY.leading_mm();
        self.ensure_room(needed);
        self.spacer(SECTION_SPACE_BEFORE_MM);
        self.paragraph(title, &SECTION_TITLE, Align::Left);
        self.rule();
    }

    /// One bullet item: glyph in the gutter, wrapped text at the bullet
    /// indent. Continuation lines align under the first text line.
    fn bullet(&mut self, text: &str) {
        let indent = BULLET_TEXT_INDENT_MM;
        let width = self.config.text_width_mm() - indent;
        let lines = wrap_words(text, BULLET.face, BULLET.size_pt, width);
        for (i, line) in lines.iter().enumerate() {
            self.draw_line_at(line, &BULLET, self.config.left_mm() + indent);
            if i == 0 {
                // Glyph shares the first line's baseline.
                self.layer.use_text(
                    "\u{2022}",
                    BULLET.size_pt,
                    Mm(self.config.left_mm() + BULLET_GLYPH_INDENT_MM),
                    Mm(self.y_mm),
                    self.font(BULLET.face),
                );
            }
        }
        self.y_mm -= BULLET.space_after_mm;
    }

    /// Height of a run of single-line paragraphs, for keep-together checks.
    fn block_height(parts: &[&TextStyle]) -> f32 {
        parts
            .iter()
            .map(|s| s.leading_mm() + s.space_after_mm)
            .sum()
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        debug!(pages = self.pages, "pdf layout complete");
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders a Record as a paginated A4 PDF.
pub fn render_pdf(record: &Record) -> Result<Vec<u8>, ExportError> {
    let info = &record.personal_info;
    let title = if info.has_name() {
        format!("{} — CV", info.name)
    } else {
        "CV".to_string()
    };
    let mut w = PageWriter::new(&title)?;

    if info.has_name() {
        w.paragraph(&info.name, &NAME, Align::Center);

        // Contact parts carry the raw profile URLs — no display prefixes in
        // the paginated output, unlike the Markdown/DOCX renditions.
        let mut contact = Vec::new();
        if !info.email.is_empty() {
            contact.push(info.email.as_str());
        }
        if !info.phone.is_empty() {
            contact.push(info.phone.as_str());
        }
        if !info.linkedin.is_empty() {
            contact.push(info.linkedin.as_str());
        }
        if !info.github.is_empty() {
            contact.push(info.github.as_str());
        }
        if !contact.is_empty() {
            w.paragraph(&contact.join(" | "), &CONTACT, Align::Center);
        }
    }

    if record.has_summary() {
        w.section_heading("SUMMARY");
        w.paragraph(&info.summary, &BODY, Align::Left);
        w.spacer(4.0);
    }

    if record.has_education() {
        w.section_heading("EDUCATION");
        for edu in &record.education {
            // Heading lines stay on one page as a unit.
            let mut parts = vec![&SUBHEAD_BOLD, &SUBHEAD_PLAIN];
            let mut date_gpa = Vec::new();
            if !edu.start_date.is_empty() && !edu.end_date.is_empty() {
                date_gpa.push(format!("{} - {}", edu.start_date, edu.end_date));
            }
            if let Some(gpa) = &edu.gpa {
                date_gpa.push(format!("GPA: {gpa}"));
            }
            if !date_gpa.is_empty() {
                parts.push(&DATE_LOCATION);
            }
            w.ensure_room(PageWriter::block_height(&parts));

            w.paragraph(
                &format!("{} in {}", edu.degree, edu.major),
                &SUBHEAD_BOLD,
                Align::Left,
            );
            w.paragraph(
                &format!("{}, {}", edu.institution, edu.location),
                &SUBHEAD_PLAIN,
                Align::Left,
            );
            if !date_gpa.is_empty() {
                w.paragraph(&date_gpa.join(" | "), &DATE_LOCATION, Align::Left);
            }
            w.spacer(4.0);
        }
    }

    if record.has_experience() {
        w.section_heading("EXPERIENCE");
        for exp in &record.experience {
            let mut parts = vec![&SUBHEAD_BOLD, &SUBHEAD_PLAIN];
            let has_dates = !exp.start_date.is_empty() && !exp.end_date.is_empty();
            if has_dates {
                parts.push(&DATE_LOCATION);
            }
            w.ensure_room(PageWriter::block_height(&parts));

            w.paragraph(
                &format!("{} at {}", exp.title, exp.company),
                &SUBHEAD_BOLD,
                Align::Left,
            );
            w.paragraph(&exp.location, &SUBHEAD_PLAIN, Align::Left);
            if has_dates {
                w.paragraph(
                    &format!("{} - {}", exp.start_date, exp.end_date),
                    &DATE_LOCATION,
                    Align::Left,
                );
            }

            // The bullet list under an entry may flow across page breaks.
            let bullets = description_bullets(&exp.description);
            if !bullets.is_empty() {
                w.spacer(1.0);
                for line in bullets {
                    w.bullet(line);
                }
                w.spacer(2.0);
            }
            w.spacer(4.0);
        }
    }

    if record.has_skills() {
        w.section_heading("SKILLS");
        for category in SkillCategory::ALL {
            let list = category.list(&record.skills);
            if !list.is_empty() {
                w.labeled_paragraph(
                    &format!("{}:", category.label()),
                    &list.join(", "),
                    &BODY,
                );
            }
        }
        w.spacer(4.0);
    }

    w.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
