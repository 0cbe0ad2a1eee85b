//! Render request to Typst markup transpiler
//!
//! Page, text and paragraph defaults are emitted as `set` rules; every block
//! then becomes an explicit function call. Report text is only ever passed as
//! a Typst string literal, so markup characters in generated content (`*`,
//! `#`, `=`, `_`) are never interpreted.

use formlix_ast::{Block, RenderRequest, Section, SectionRole, StyleContract};

/// Transpiler for converting render requests to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a request using the report style
    pub fn transpile(request: &RenderRequest) -> String {
        Self::transpile_with_style(request, &StyleContract::REPORT)
    }

    /// Transpile a request with a custom style contract
    pub fn transpile_with_style(request: &RenderRequest, style: &StyleContract) -> String {
        let mut output = String::new();

        output.push_str(&Self::preamble(request.topic(), style));
        output.push('\n');
        output.push_str(&Self::title(&request.title(), style));
        output.push('\n');

        for (index, section) in request.outline().sections.iter().enumerate() {
            output.push_str(&Self::transpile_section(index, section, style));
        }

        output
    }

    /// Document-wide set rules
    fn preamble(topic: &str, style: &StyleContract) -> String {
        let page = style.page;
        let border = page.border;
        let para = style.paragraph;

        let mut fonts = vec![quote(style.font_family)];
        fonts.extend(style.font_fallbacks.iter().map(|f| quote(f)));

        // Typst leading is the gap between lines, not the line pitch
        let leading = 0.65 + (para.line_spacing - 1.0);

        let mut output = String::new();
        output.push_str(&format!("#set document(title: {})\n", quote(topic)));
        output.push_str(&format!(
            "#set page(width: {}, height: {}, margin: {}, background: place(top + left, dx: {inset}, dy: {inset}, rect(width: 100% - {double}, height: 100% - {double}, stroke: {} + black)))\n",
            pt(page.width_pt),
            pt(page.height_pt),
            pt(page.margin_pt),
            pt(border.width_pt),
            inset = pt(border.inset_pt),
            double = pt(border.inset_pt * 2.0),
        ));
        output.push_str(&format!(
            "#set text(font: ({},), size: {})\n",
            fonts.join(", "),
            pt(para.size_pt)
        ));
        output.push_str(&format!(
            "#set par(leading: {leading:.2}em, spacing: {})\n",
            pt(para.space_after_pt)
        ));
        output.push_str(&format!(
            "#set enum(numbering: \"1.\", spacing: {}, indent: {}, body-indent: {})\n",
            pt(style.references.space_after_pt),
            pt(style.references.indent_pt - style.references.hanging_pt),
            pt(style.references.hanging_pt / 3.0),
        ));
        output
    }

    fn title(title: &str, style: &StyleContract) -> String {
        let heading = style.title;
        let body = format!(
            "block(below: {}, text(size: {}, weight: {}, {}))",
            pt(heading.space_after_pt),
            pt(heading.size_pt),
            weight(heading.bold),
            quote(&heading.label(title))
        );
        if heading.centered {
            format!("#align(center, {body})\n")
        } else {
            format!("#{body}\n")
        }
    }

    fn transpile_section(index: usize, section: &Section, style: &StyleContract) -> String {
        let mut output = String::new();

        if style.breaks_page_before(section.role) {
            output.push_str("#pagebreak(weak: true)\n");
        }

        let heading = style.section;
        output.push_str(&format!(
            "#block(above: {}, below: {}, sticky: true, text(size: {}, weight: {}, {}))\n\n",
            pt(style.section_space_before(index)),
            pt(heading.space_after_pt),
            pt(heading.size_pt),
            weight(heading.bold),
            quote(&heading.label(&section.name))
        ));

        let mut references = Vec::new();
        for block in &section.blocks {
            match block {
                Block::ReferenceItem { ordinal, text } => {
                    references.push((*ordinal, text.as_str()));
                    continue;
                }
                _ => {
                    if !references.is_empty() {
                        output.push_str(&Self::reference_list(&references));
                        references.clear();
                    }
                }
            }

            match block {
                Block::Subheading { name } if style.shows_subheadings(section.role) => {
                    output.push_str(&Self::subheading(name, style));
                }
                Block::Paragraph { text } => {
                    output.push_str(&Self::paragraph(text, section.role, style));
                }
                _ => {}
            }
        }
        if !references.is_empty() {
            output.push_str(&Self::reference_list(&references));
        }

        output
    }

    fn subheading(name: &str, style: &StyleContract) -> String {
        let heading = style.subsection;
        format!(
            "#block(above: {}, below: {}, sticky: true, pad(left: {}, text(size: {}, weight: {}, {})))\n\n",
            pt(heading.space_before_pt),
            pt(heading.space_after_pt),
            pt(heading.indent_pt),
            pt(heading.size_pt),
            weight(heading.bold),
            quote(&heading.label(name))
        )
    }

    fn paragraph(text: &str, role: SectionRole, style: &StyleContract) -> String {
        format!(
            "#par(justify: {}, first-line-indent: (amount: {}, all: true), {})\n\n",
            style.paragraph.justified,
            pt(style.paragraph_indent(role)),
            quote(text)
        )
    }

    /// Items keep their parsed ordinal rather than Typst's own count
    fn reference_list(items: &[(u32, &str)]) -> String {
        let mut output = String::from("#enum(\n");
        for (ordinal, text) in items {
            output.push_str(&format!("  enum.item({ordinal}, {}),\n", quote(text)));
        }
        output.push_str(")\n\n");
        output
    }
}

/// Format a length in points, dropping a trailing `.0`
fn pt(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}pt", rounded as i64)
    } else {
        format!("{rounded}pt")
    }
}

fn weight(bold: bool) -> &'static str {
    if bold {
        "\"bold\""
    } else {
        "\"regular\""
    }
}

/// Quote text as a Typst string literal
fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}
