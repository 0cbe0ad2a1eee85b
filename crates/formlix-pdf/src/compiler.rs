//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::Path;

use tracing::debug;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&Path>(markup, &[])
    }

    /// Compile with fonts loaded from the given files
    ///
    /// The bundled Typst fonts (Libertinus Serif, New Computer Modern) are
    /// always available after the given files.
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let mut fonts = Vec::new();
        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", font_path.display(), e))
            })?;
            fonts.push(bytes);
        }
        fonts.extend(typst_assets::fonts().map(<[u8]>::to_vec));

        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .build();

        // compiled.output is the Result; compiled.warnings are diagnostics
        let compiled = engine.compile();
        if !compiled.warnings.is_empty() {
            debug!(count = compiled.warnings.len(), "Typst warnings");
        }
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}
