//! Renderer interface
//!
//! Both output formats sit behind [`ReportRenderer`] so the generator never
//! branches on format after selection.

use std::path::PathBuf;

use formlix_ast::{RenderRequest, ReportFormat};
use formlix_ooxml::DocxWriter;
use formlix_pdf::render_pdf_with_fonts;

use crate::config::Settings;
use crate::error::RenderError;

/// A renderer producing one artifact format
pub trait ReportRenderer: Send + Sync {
    /// Short renderer name for logs
    fn name(&self) -> &'static str;

    /// Format this renderer produces
    fn format(&self) -> ReportFormat;

    /// Render a request to artifact bytes
    fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError>;
}

/// DOCX renderer backed by [`DocxWriter`]
#[derive(Debug, Default, Clone)]
pub struct DocxRenderer;

impl ReportRenderer for DocxRenderer {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Docx
    }

    fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        Ok(DocxWriter::generate(request)?)
    }
}

/// PDF renderer backed by Typst
#[derive(Debug, Default, Clone)]
pub struct PdfRenderer {
    font_paths: Vec<PathBuf>,
}

impl PdfRenderer {
    /// Create a renderer loading the given font files
    pub fn new(font_paths: Vec<PathBuf>) -> Self {
        Self { font_paths }
    }
}

impl ReportRenderer for PdfRenderer {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        Ok(render_pdf_with_fonts(request, &self.font_paths)?)
    }
}

/// Select the renderer for `format`
pub fn renderer_for(format: ReportFormat, settings: &Settings) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Docx => Box::new(DocxRenderer),
        ReportFormat::Pdf => Box::new(PdfRenderer::new(settings.pdf.font_paths.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formlix_ast::Outline;

    #[test]
    fn test_renderer_selection() {
        let settings = Settings::default();
        for format in ReportFormat::ALL {
            let renderer = renderer_for(format, &settings);
            assert_eq!(renderer.format(), format);
            assert_eq!(renderer.name(), format.extension());
        }
    }

    #[test]
    fn test_docx_renderer_output_is_zip() {
        let request = RenderRequest::new("T", Outline::new(), None, ReportFormat::Docx);
        let bytes = DocxRenderer.render(&request).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_pdf_renderer_font_error() {
        let request = RenderRequest::new("T", Outline::new(), None, ReportFormat::Pdf);
        let renderer = PdfRenderer::new(vec![PathBuf::from("/nonexistent/font.ttf")]);
        assert!(matches!(
            renderer.render(&request),
            Err(RenderError::Pdf(_))
        ));
    }
}
