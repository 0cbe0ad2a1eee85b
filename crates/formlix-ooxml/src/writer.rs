//! DOCX Writer
//!
//! This module writes a [`RenderRequest`] to a DOCX package. The body is
//! emitted as WordprocessingML with direct paragraph and run formatting taken
//! from the [`StyleContract`], so the result does not depend on a template.
//!
//! # Example
//!
//! ```ignore
//! use formlix_ooxml::DocxWriter;
//!
//! let bytes = DocxWriter::generate(&request)?;
//! std::fs::write("report.docx", bytes)?;
//! ```

use formlix_ast::style::{eighth_points, half_points, line_240ths, twips};
use formlix_ast::{Block, RenderRequest, Section, SectionRole, StyleContract};
use tracing::debug;

use crate::archive::OoxmlArchive;
use crate::error::Result;
use crate::package::{self, escape_xml, NUMBERING_ID, W_NS};

/// DOCX Writer for generating report packages
pub struct DocxWriter {
    /// XML output buffer for word/document.xml
    output: String,
    /// Layout rules
    style: StyleContract,
    /// Ordinal Word's list counter will show next; `None` once the parsed
    /// ordinals stop following the counter
    next_list_ordinal: Option<u32>,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Create a writer using the report style
    pub fn new() -> Self {
        Self::with_style(StyleContract::REPORT)
    }

    /// Create a writer with a custom style contract
    pub fn with_style(style: StyleContract) -> Self {
        Self {
            output: String::new(),
            style,
            next_list_ordinal: None,
        }
    }

    /// Generate a DOCX file for the request using the report style
    ///
    /// # Returns
    ///
    /// The generated DOCX file as bytes
    pub fn generate(request: &RenderRequest) -> Result<Vec<u8>> {
        DocxWriter::new().write(request)
    }

    /// Build the package for the request
    pub fn write(mut self, request: &RenderRequest) -> Result<Vec<u8>> {
        let document_xml = self.generate_document_xml(request);
        let archive = self.build_archive(request, document_xml);
        let bytes = archive.to_bytes()?;

        debug!(
            sections = request.outline().len(),
            bytes = bytes.len(),
            "DOCX package assembled"
        );
        Ok(bytes)
    }

    fn build_archive(&self, request: &RenderRequest, document_xml: String) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", package::content_types_xml());
        archive.set_string("_rels/.rels", package::root_rels_xml());
        archive.set_string("docProps/core.xml", package::core_xml(request.topic()));
        archive.set_string("docProps/app.xml", package::app_xml());
        archive.set_string("word/_rels/document.xml.rels", package::document_rels_xml());
        archive.set_string("word/styles.xml", package::styles_xml(&self.style));
        archive.set_string(
            "word/numbering.xml",
            package::numbering_xml(&self.style, first_reference_ordinal(request)),
        );
        archive.set_string("word/document.xml", document_xml);
        archive
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, request: &RenderRequest) -> String {
        self.output.clear();
        self.next_list_ordinal = Some(first_reference_ordinal(request));

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            r#"<w:document xmlns:w="{W_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#
        ));
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        self.generate_title(&request.title());

        for (index, section) in request.outline().sections.iter().enumerate() {
            self.generate_section(index, section);
        }

        self.generate_section_properties();

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    fn generate_title(&mut self, title: &str) {
        let heading = self.style.title;
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str("<w:jc w:val=\"center\"/>\n");
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            twips(heading.space_before_pt),
            twips(heading.space_after_pt)
        ));
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&heading.label(title), heading.size_pt, heading.bold);
        self.output.push_str("</w:p>\n");
    }

    fn generate_section(&mut self, index: usize, section: &Section) {
        if self.style.breaks_page_before(section.role) {
            self.generate_page_break();
        }

        self.generate_section_heading(index, &section.name);

        for block in &section.blocks {
            match block {
                Block::Subheading { name } => {
                    if self.style.shows_subheadings(section.role) {
                        self.generate_subheading(name);
                    }
                }
                Block::Paragraph { text } => self.generate_paragraph(text, section.role),
                Block::ReferenceItem { ordinal, text } => self.generate_reference(*ordinal, text),
            }
        }
    }

    fn generate_page_break(&mut self) {
        self.output.push_str("<w:p>\n<w:r>\n");
        self.output.push_str("<w:br w:type=\"page\"/>\n");
        self.output.push_str("</w:r>\n</w:p>\n");
    }

    fn generate_section_heading(&mut self, index: usize, name: &str) {
        let heading = self.style.section;
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str("<w:keepNext/>\n");
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            twips(self.style.section_space_before(index)),
            twips(heading.space_after_pt)
        ));
        self.output.push_str("<w:outlineLvl w:val=\"0\"/>\n");
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&heading.label(name), heading.size_pt, heading.bold);
        self.output.push_str("</w:p>\n");
    }

    fn generate_subheading(&mut self, name: &str) {
        let heading = self.style.subsection;
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str("<w:keepNext/>\n");
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            twips(heading.space_before_pt),
            twips(heading.space_after_pt)
        ));
        self.output.push_str(&format!(
            "<w:ind w:left=\"{}\"/>\n",
            twips(heading.indent_pt)
        ));
        self.output.push_str("<w:outlineLvl w:val=\"1\"/>\n");
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&heading.label(name), heading.size_pt, heading.bold);
        self.output.push_str("</w:p>\n");
    }

    fn generate_paragraph(&mut self, text: &str, role: SectionRole) {
        let para = self.style.paragraph;
        self.output.push_str("<w:p>\n<w:pPr>\n");
        if para.justified {
            self.output.push_str("<w:jc w:val=\"both\"/>\n");
        }
        self.output.push_str(&format!(
            "<w:spacing w:after=\"{}\" w:line=\"{}\" w:lineRule=\"auto\"/>\n",
            twips(para.space_after_pt),
            line_240ths(para.line_spacing)
        ));
        let indent = self.style.paragraph_indent(role);
        if indent > 0.0 {
            self.output
                .push_str(&format!("<w:ind w:firstLine=\"{}\"/>\n", twips(indent)));
        }
        self.output.push_str("</w:pPr>\n");
        self.generate_run(text, para.size_pt, false);
        self.output.push_str("</w:p>\n");
    }

    /// Reference entries are list paragraphs. While the ordinals run on from
    /// the numbering start, Word's counter shows them; after a gap the
    /// ordinal is written out in the text instead.
    fn generate_reference(&mut self, ordinal: u32, text: &str) {
        let list = self.style.references;
        let auto_numbered = self.next_list_ordinal == Some(ordinal);
        self.next_list_ordinal = if auto_numbered {
            ordinal.checked_add(1)
        } else {
            None
        };

        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output
            .push_str("<w:pStyle w:val=\"ListParagraph\"/>\n");
        self.output.push_str("<w:widowControl/>\n");
        if auto_numbered {
            self.output.push_str(&format!(
                "<w:numPr>\n<w:ilvl w:val=\"0\"/>\n<w:numId w:val=\"{NUMBERING_ID}\"/>\n</w:numPr>\n"
            ));
        }
        self.output.push_str(&format!(
            "<w:spacing w:after=\"{}\"/>\n",
            twips(list.space_after_pt)
        ));
        if !auto_numbered {
            self.output.push_str(&format!(
                "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>\n",
                twips(list.indent_pt),
                twips(list.hanging_pt)
            ));
        }
        self.output.push_str("</w:pPr>\n");
        if auto_numbered {
            self.generate_run(text, list.size_pt, false);
        } else {
            self.generate_run(&format!("{ordinal}. {text}"), list.size_pt, false);
        }
        self.output.push_str("</w:p>\n");
    }

    fn generate_run(&mut self, text: &str, size_pt: f32, bold: bool) {
        let font = escape_xml(self.style.font_family);
        let size = half_points(size_pt);
        self.output.push_str("<w:r>\n<w:rPr>\n");
        self.output.push_str(&format!(
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>\n"
        ));
        if bold {
            self.output.push_str("<w:b/>\n<w:bCs/>\n");
        }
        self.output
            .push_str(&format!("<w:sz w:val=\"{size}\"/>\n<w:szCs w:val=\"{size}\"/>\n"));
        self.output.push_str("</w:rPr>\n");
        self.output.push_str("<w:t xml:space=\"preserve\">");
        self.output.push_str(&escape_xml(text));
        self.output.push_str("</w:t>\n</w:r>\n");
    }

    /// Final section properties: page size, margins and the page frame
    fn generate_section_properties(&mut self) {
        let page = self.style.page;
        let margin = twips(page.margin_pt);
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            twips(page.width_pt),
            twips(page.height_pt)
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{margin}\" w:right=\"{margin}\" w:bottom=\"{margin}\" w:left=\"{margin}\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\n"
        ));

        // Border distance is in points when offset from the page edge
        let size = eighth_points(page.border.width_pt);
        let space = page.border.inset_pt.round() as u32;
        self.output.push_str(
            "<w:pgBorders w:display=\"allPages\" w:offsetFrom=\"page\">\n",
        );
        for side in ["top", "left", "bottom", "right"] {
            self.output.push_str(&format!(
                "<w:{side} w:val=\"single\" w:sz=\"{size}\" w:space=\"{space}\" w:color=\"000000\"/>\n"
            ));
        }
        self.output.push_str("</w:pgBorders>\n");
        self.output.push_str("</w:sectPr>\n");
    }
}

/// Ordinal of the first reference entry, or 1 without references
fn first_reference_ordinal(request: &RenderRequest) -> u32 {
    request
        .outline()
        .references()
        .and_then(|s| s.references().next())
        .map(|(ordinal, _)| ordinal)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formlix_ast::{Outline, ReportFormat};

    fn request(outline: Outline) -> RenderRequest {
        RenderRequest::new("Renewable Energy", outline, Some(2), ReportFormat::Docx)
    }

    fn document_xml(request: &RenderRequest) -> String {
        DocxWriter::new().generate_document_xml(request)
    }

    fn sample_outline() -> Outline {
        let mut intro = Section::new("Introduction");
        intro.push(Block::subheading("Background"));
        intro.push(Block::paragraph("Wind & solar."));

        let mut conclusion = Section::new("Conclusion");
        conclusion.push(Block::subheading("Hidden"));
        conclusion.push(Block::paragraph("Done."));

        let mut refs = Section::new("References");
        refs.push(Block::reference(1, "Doe, J. (2024). Power."));

        Outline {
            sections: vec![intro, conclusion, refs],
        }
    }

    #[test]
    fn test_title_is_uppercase_centered_bold() {
        let xml = document_xml(&request(Outline::new()));
        assert!(xml.contains("RENEWABLE ENERGY"));
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:sz w:val=\"36\"/>"));
        assert!(xml.contains("<w:b/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = document_xml(&request(sample_outline()));
        assert!(xml.contains("Wind &amp; solar."));
    }

    #[test]
    fn test_conclusion_subheading_dropped() {
        let xml = document_xml(&request(sample_outline()));
        assert!(xml.contains("\u{25CB} Background"));
        assert!(!xml.contains("Hidden"));
    }

    #[test]
    fn test_page_breaks_only_before_closing_sections() {
        let xml = document_xml(&request(sample_outline()));
        assert_eq!(xml.matches("<w:br w:type=\"page\"/>").count(), 2);

        let first_break = xml.find("<w:br w:type=\"page\"/>").unwrap();
        let conclusion = xml.find("\u{25CF} Conclusion").unwrap();
        let intro = xml.find("\u{25CF} Introduction").unwrap();
        assert!(intro < first_break && first_break < conclusion);
    }

    #[test]
    fn test_first_section_has_no_leading_space() {
        let xml = document_xml(&request(sample_outline()));
        assert!(xml.contains("<w:spacing w:before=\"0\" w:after=\"180\"/>"));
        assert!(xml.contains("<w:spacing w:before=\"300\" w:after=\"180\"/>"));
    }

    #[test]
    fn test_reference_is_numbered_without_indent() {
        let xml = document_xml(&request(sample_outline()));
        let start = xml.find("Doe, J.").unwrap();
        let para_start = xml[..start].rfind("<w:p>").unwrap();
        let para = &xml[para_start..start];
        assert!(para.contains("<w:numId w:val=\"1\"/>"));
        assert!(!para.contains("w:firstLine"));
    }

    #[test]
    fn test_page_border_on_all_pages() {
        let xml = document_xml(&request(Outline::new()));
        assert!(xml.contains("<w:pgBorders w:display=\"allPages\" w:offsetFrom=\"page\">"));
        assert_eq!(xml.matches("w:val=\"single\" w:sz=\"12\"").count(), 4);
    }

    #[test]
    fn test_generate_produces_package() {
        let bytes = DocxWriter::generate(&request(sample_outline())).unwrap();
        let archive = OoxmlArchive::from_bytes(&bytes).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/_rels/document.xml.rels",
            "docProps/core.xml",
        ] {
            assert!(archive.contains(part), "missing {part}");
        }
    }
}
