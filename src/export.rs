// src/export.rs
//! Recruiter-style PDF export driven by the document projection.
//!
//! Layout: centered header block (name, role, contact line, optional link
//! line), sections in template order, each with an upper-cased heading over
//! a horizontal rule, and a fixed footer caption. Sections without content
//! never appear, so no orphan headings. Single-page-oriented; overflowing
//! content continues on a fresh page rather than being truncated.

use anyhow::{Context, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::model::ResumeVersion;
use crate::projection::{self, EntryBlock, Projection, RenderMode, SectionBody};
use crate::templates::TemplateDescriptor;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 18.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
const FOOTER_Y: f64 = 12.0;

const PT_TO_MM: f64 = 0.352_778;
// Average Helvetica glyph advance relative to the font size; close enough
// for wrapping and centering text without full font metrics.
const GLYPH_WIDTH_FACTOR: f64 = 0.5;

const FOOTER_CAPTION: &str = "Resume generated via Bharat Resume Builder";

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn link_blue() -> Color {
    // #1e40af
    Color::Rgb(Rgb::new(0.118, 0.251, 0.686, None))
}

fn rule_grey() -> Color {
    // #d1d5db
    Color::Rgb(Rgb::new(0.820, 0.835, 0.859, None))
}

fn footer_grey() -> Color {
    // #6b7280
    Color::Rgb(Rgb::new(0.420, 0.447, 0.502, None))
}

fn text_width_mm(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_FACTOR * PT_TO_MM
}

/// Greedy word wrap against the estimated text width. Tokens wider than a
/// full line (long URLs) are hard-split mid-token.
fn wrap_text(text: &str, font_size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if text_width_mm(word, font_size) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunks = split_token(word, font_size, max_width);
            if let Some(last) = chunks.pop() {
                lines.extend(chunks);
                current = last;
            }
            continue;
        }

        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_token(word: &str, font_size: f64, max_width: f64) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    for c in word.chars() {
        if !chunk.is_empty() && text_width_mm(&format!("{chunk}{c}"), font_size) > max_width {
            chunks.push(std::mem::take(&mut chunk));
        }
        chunk.push(c);
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Oblique,
}

enum Align {
    Left,
    Center,
}

struct DocumentWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl DocumentWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .context("Failed to load Helvetica")?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .context("Failed to load Helvetica-Bold")?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .context("Failed to load Helvetica-Oblique")?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
            regular,
            bold,
            oblique,
        })
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
        }
    }

    fn line_height(font_size: f64) -> f64 {
        font_size * PT_TO_MM * 1.45
    }

    /// Start a new page when fewer than `needed` millimetres remain above
    /// the footer area.
    fn ensure_space(&mut self, needed: f64) {
        if self.y - needed < FOOTER_Y + 6.0 {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn write_line(&mut self, text: &str, font_size: f64, face: Face, color: Color, align: Align) {
        if text.is_empty() {
            return;
        }
        self.ensure_space(Self::line_height(font_size));
        let x = match align {
            Align::Left => MARGIN,
            Align::Center => {
                let width = text_width_mm(text, font_size);
                ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
            }
        };
        self.layer.set_fill_color(color);
        self.y -= Self::line_height(font_size);
        self.layer
            .use_text(
                text,
                font_size as f32,
                Mm(x as f32),
                Mm(self.y as f32),
                self.font(face),
            );
    }

    fn write_wrapped(&mut self, text: &str, font_size: f64, face: Face, color: Color) {
        for line in wrap_text(text, font_size, CONTENT_WIDTH) {
            self.write_line(&line, font_size, face, color.clone(), Align::Left);
        }
    }

    fn rule(&mut self) {
        self.ensure_space(2.0);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN as f32), Mm(self.y as f32)), false),
                (
                    Point::new(Mm((PAGE_WIDTH - MARGIN) as f32), Mm(self.y as f32)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.set_outline_color(rule_grey());
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(line);
        self.y -= 2.0;
    }

    fn gap(&mut self, millimetres: f64) {
        self.y -= millimetres;
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.layer.set_fill_color(footer_grey());
        let width = text_width_mm(FOOTER_CAPTION, 8.0);
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN);
        self.layer
            .use_text(
                FOOTER_CAPTION,
                8.0,
                Mm(x as f32),
                Mm(FOOTER_Y as f32),
                &self.regular,
            );
        self.doc
            .save_to_bytes()
            .context("Failed to serialize PDF document")
    }
}

fn write_header(writer: &mut DocumentWriter, projection: &Projection) {
    let header = &projection.header;

    let name = if header.full_name.is_empty() {
        "Candidate Name"
    } else {
        &header.full_name
    };
    writer.write_line(name, 20.0, Face::Bold, black(), Align::Center);
    writer.gap(1.0);

    let role = if header.role.is_empty() {
        "Target Role"
    } else {
        &header.role
    };
    writer.write_line(role, 14.0, Face::Regular, black(), Align::Center);

    if !header.contact_parts.is_empty() {
        writer.write_line(
            &header.contact_parts.join(" · "),
            10.0,
            Face::Regular,
            black(),
            Align::Center,
        );
    }

    if !header.link_parts.is_empty() {
        writer.write_line(
            &header.link_parts.join(" · "),
            9.0,
            Face::Regular,
            link_blue(),
            Align::Center,
        );
    }

    writer.gap(6.0);
}

fn write_entries(writer: &mut DocumentWriter, entries: &[EntryBlock], dense: bool) {
    let entry_gap = if dense { 1.5 } else { 3.0 };
    for (index, entry) in entries.iter().enumerate() {
        if !entry.heading.is_empty() {
            writer.write_line(&entry.heading, 11.0, Face::Bold, black(), Align::Left);
        }
        if !entry.subheading.is_empty() {
            writer.write_line(&entry.subheading, 10.0, Face::Oblique, black(), Align::Left);
        }
        if !entry.body.is_empty() {
            writer.write_wrapped(&entry.body, 10.0, Face::Regular, black());
        }
        if index < entries.len() - 1 {
            writer.gap(entry_gap);
        }
    }
}

/// Render one resume version as a formatted PDF byte stream.
pub fn render_pdf(version: &ResumeVersion, descriptor: &TemplateDescriptor) -> Result<Vec<u8>> {
    let projection = projection::project(version, descriptor, RenderMode::Document);

    let mut writer = DocumentWriter::new("Resume")?;
    write_header(&mut writer, &projection);

    for section in &projection.sections {
        let section_gap = if section.dense { 2.5 } else { 4.0 };
        writer.ensure_space(16.0);
        writer.write_line(
            &section.title.to_uppercase(),
            12.0,
            Face::Bold,
            black(),
            Align::Left,
        );
        writer.rule();

        match &section.body {
            SectionBody::Paragraph { text } => {
                writer.write_wrapped(text, 10.0, Face::Regular, black());
            }
            SectionBody::Chips { skills, .. } => {
                // Placeholder hints are preview-only; the document
                // projection never emits an empty chip list.
                writer.write_wrapped(&skills.join(" · "), 10.0, Face::Regular, black());
            }
            SectionBody::Entries { entries } => {
                write_entries(&mut writer, entries, section.dense);
            }
        }

        writer.gap(section_gap);
    }

    writer.finish()
}

/// Download filename derived from the candidate name.
pub fn pdf_filename(full_name: &str) -> String {
    let stem = full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExperienceEntry, VersionContent};
    use crate::templates;
    use chrono::Utc;

    fn sample_version() -> ResumeVersion {
        ResumeVersion {
            content: VersionContent {
                full_name: "Asha Devi".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
                role: "Delivery Executive".to_string(),
                summary: "Two years of reliable delivery and warehouse work across Delhi."
                    .to_string(),
                skills: vec!["Driving".to_string(), "Delivery".to_string()],
                experience: vec![ExperienceEntry {
                    title: "Delivery Executive".to_string(),
                    company: "Swiggy".to_string(),
                    duration: "Jan 2022 - Mar 2024".to_string(),
                    description: "Handled 100+ orders per day with a zero-accident record."
                        .to_string(),
                }],
                ..VersionContent::default()
            },
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let descriptor = templates::resolve("blue-collar", "ats-basic");
        let bytes = render_pdf(&sample_version(), descriptor).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_pdf_on_empty_version_still_succeeds() {
        let version = ResumeVersion {
            content: VersionContent::default(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };
        let descriptor = templates::resolve("blue-collar", "ats-basic");
        let bytes = render_pdf(&version, descriptor).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text(
            "a long sentence that will definitely need to wrap over lines",
            10.0,
            30.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0) <= 30.0 + 10.0 * GLYPH_WIDTH_FACTOR * PT_TO_MM);
        }
    }

    #[test]
    fn test_wrap_text_splits_oversized_token() {
        let url = "https://example.com/very/long/path/without/any/spaces/anywhere/at/all";
        let lines = wrap_text(url, 10.0, 30.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0) <= 30.0);
        }
        // nothing lost in the split
        assert_eq!(lines.concat(), url);
    }

    #[test]
    fn test_pdf_filename() {
        assert_eq!(pdf_filename("Asha Devi"), "Asha_Devi.pdf");
        assert_eq!(pdf_filename("  "), "Resume.pdf");
        assert_eq!(pdf_filename(""), "Resume.pdf");
    }
}
