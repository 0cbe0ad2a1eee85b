//! End-to-end PDF rendering tests

use formlix_ast::{Block, Outline, RenderRequest, ReportFormat, Section};
use formlix_pdf::{render_pdf, render_pdf_with_fonts, PdfError, Transpiler};

fn report() -> RenderRequest {
    let mut intro = Section::new("Introduction");
    intro.push(Block::subheading("Background"));
    for i in 0..20 {
        intro.push(Block::paragraph(format!(
            "Paragraph {i} discusses \"coral reefs\" and their #1 threat: warming."
        )));
    }

    let mut conclusion = Section::new("Conclusion");
    conclusion.push(Block::paragraph("Reefs need protection."));

    let mut refs = Section::new("References");
    refs.push(Block::reference(1, "Author, A. (2024). Reefs. Journal, 1(1), 1-2."));
    refs.push(Block::reference(2, "Smith, B. (2024). Corals. Publisher."));

    RenderRequest::new(
        "Coral Reefs",
        Outline {
            sections: vec![intro, conclusion, refs],
        },
        Some(2),
        ReportFormat::Pdf,
    )
}

#[test]
fn test_render_full_report() {
    let pdf = render_pdf(&report()).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_render_without_font_files_embeds_a_font() {
    let pdf = render_pdf(&report()).unwrap();
    assert!(contains(&pdf, b"/FontFile"));
    assert!(contains(&pdf, b"/Font"));
}

#[test]
fn test_render_empty_outline() {
    let request = RenderRequest::new("Nothing", Outline::new(), None, ReportFormat::Pdf);
    let pdf = render_pdf(&request).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, render_pdf(&report()).unwrap()).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_unreadable_font_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ttf");
    let result = render_pdf_with_fonts(&report(), &[missing]);
    assert!(matches!(result, Err(PdfError::Font(_))));
}

#[test]
fn test_markup_has_one_title() {
    let markup = Transpiler::transpile(&report());
    assert_eq!(markup.matches("\"CORAL REEFS\"").count(), 1);
}
