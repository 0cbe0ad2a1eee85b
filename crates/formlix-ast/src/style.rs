//! Shared style contract
//!
//! Both renderers read their sizes, spacing and page-break rules from a
//! [`StyleContract`]. All measurements are in points; each backend converts
//! to its own units (twips and half-points for WordprocessingML, `pt` for
//! Typst) through the helpers at the bottom of this module.

use crate::outline::SectionRole;

/// Heading appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    /// Font size in points
    pub size_pt: f32,
    /// Bold weight
    pub bold: bool,
    /// Glyph placed before the heading text (empty for none)
    pub marker: &'static str,
    /// Left indent in points
    pub indent_pt: f32,
    /// Space before the heading in points
    pub space_before_pt: f32,
    /// Space after the heading in points
    pub space_after_pt: f32,
    /// Centered alignment
    pub centered: bool,
}

impl HeadingStyle {
    /// Heading text with the marker glyph applied
    pub fn label(&self, text: &str) -> String {
        if self.marker.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.marker, text)
        }
    }
}

/// Running-text paragraph appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub size_pt: f32,
    pub first_line_indent_pt: f32,
    pub space_after_pt: f32,
    /// Line height as a multiple of single spacing
    pub line_spacing: f32,
    pub justified: bool,
}

/// Numbered reference list appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStyle {
    pub size_pt: f32,
    pub space_after_pt: f32,
    /// Indent of the item text from the left margin
    pub indent_pt: f32,
    /// Width reserved for the number, hanging left of the text
    pub hanging_pt: f32,
}

/// Full-page frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Distance of the frame from the page edge
    pub inset_pt: f32,
    /// Stroke width
    pub width_pt: f32,
}

/// Page geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
    pub border: BorderStyle,
}

/// Styling rules shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleContract {
    pub font_family: &'static str,
    /// Families tried when `font_family` is unavailable
    pub font_fallbacks: &'static [&'static str],
    pub title: HeadingStyle,
    pub section: HeadingStyle,
    pub subsection: HeadingStyle,
    pub paragraph: ParagraphStyle,
    pub references: ListStyle,
    pub page: PageStyle,
}

impl StyleContract {
    /// The academic report style
    pub const REPORT: StyleContract = StyleContract {
        font_family: "Times New Roman",
        font_fallbacks: &["Liberation Serif", "TeX Gyre Termes", "Libertinus Serif"],
        title: HeadingStyle {
            size_pt: 18.0,
            bold: true,
            marker: "",
            indent_pt: 0.0,
            space_before_pt: 0.0,
            space_after_pt: 15.0,
            centered: true,
        },
        section: HeadingStyle {
            size_pt: 15.0,
            bold: true,
            marker: "\u{25CF}",
            indent_pt: 0.0,
            space_before_pt: 15.0,
            space_after_pt: 9.0,
            centered: false,
        },
        subsection: HeadingStyle {
            size_pt: 13.0,
            bold: true,
            marker: "\u{25CB}",
            indent_pt: 18.0,
            space_before_pt: 7.5,
            space_after_pt: 6.0,
            centered: false,
        },
        paragraph: ParagraphStyle {
            size_pt: 12.0,
            first_line_indent_pt: 18.0,
            space_after_pt: 6.0,
            line_spacing: 1.5,
            justified: true,
        },
        references: ListStyle {
            size_pt: 12.0,
            space_after_pt: 4.0,
            indent_pt: 36.0,
            hanging_pt: 18.0,
        },
        page: PageStyle {
            // A4
            width_pt: 595.3,
            height_pt: 841.9,
            margin_pt: 72.0,
            border: BorderStyle {
                inset_pt: 24.0,
                width_pt: 1.5,
            },
        },
    };

    /// Space above the heading of the section at `index`.
    ///
    /// The first section follows the title directly.
    pub fn section_space_before(&self, index: usize) -> f32 {
        if index == 0 {
            0.0
        } else {
            self.section.space_before_pt
        }
    }

    /// Whether a forced page break precedes a section with this role
    pub fn breaks_page_before(&self, role: SectionRole) -> bool {
        role.starts_new_page()
    }

    /// Whether subheadings are rendered inside a section with this role
    pub fn shows_subheadings(&self, role: SectionRole) -> bool {
        role != SectionRole::Conclusion
    }

    /// First-line indent for paragraphs inside a section with this role
    pub fn paragraph_indent(&self, role: SectionRole) -> f32 {
        if role == SectionRole::References {
            0.0
        } else {
            self.paragraph.first_line_indent_pt
        }
    }
}

impl Default for StyleContract {
    fn default() -> Self {
        Self::REPORT
    }
}

/// Points to twentieths of a point (WordprocessingML spacing and indents)
pub fn twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

/// Points to half-points (WordprocessingML font sizes)
pub fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}

/// Points to eighths of a point (WordprocessingML border widths)
pub fn eighth_points(pt: f32) -> u32 {
    (pt * 8.0).round() as u32
}

/// Line-spacing multiple to 240ths of a line (`w:lineRule="auto"`)
pub fn line_240ths(multiple: f32) -> u32 {
    (multiple * 240.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(twips(18.0), 360);
        assert_eq!(twips(595.3), 11906);
        assert_eq!(twips(841.9), 16838);
        assert_eq!(half_points(15.0), 30);
        assert_eq!(eighth_points(1.5), 12);
        assert_eq!(line_240ths(1.5), 360);
    }

    #[test]
    fn test_section_spacing() {
        let style = StyleContract::REPORT;
        assert_eq!(style.section_space_before(0), 0.0);
        assert_eq!(style.section_space_before(3), style.section.space_before_pt);
    }

    #[test]
    fn test_role_rules() {
        let style = StyleContract::default();
        assert!(style.breaks_page_before(SectionRole::Conclusion));
        assert!(!style.breaks_page_before(SectionRole::Body));
        assert!(!style.shows_subheadings(SectionRole::Conclusion));
        assert!(style.shows_subheadings(SectionRole::References));
        assert_eq!(style.paragraph_indent(SectionRole::References), 0.0);
        assert_eq!(style.paragraph_indent(SectionRole::Body), 18.0);
    }

    #[test]
    fn test_heading_label() {
        let style = StyleContract::REPORT;
        assert_eq!(style.section.label("Introduction"), "\u{25CF} Introduction");
        assert_eq!(style.title.label("TITLE"), "TITLE");
    }

    #[test]
    fn test_heading_sizes_descend() {
        let style = StyleContract::REPORT;
        assert!(style.title.size_pt > style.section.size_pt);
        assert!(style.section.size_pt > style.subsection.size_pt);
        assert!(style.subsection.size_pt > style.paragraph.size_pt);
    }
}
