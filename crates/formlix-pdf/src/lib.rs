//! formlix-pdf - PDF report rendering via Typst
//!
//! This crate renders a [`RenderRequest`] to PDF using Typst as the
//! typesetting backend.
//!
//! # Architecture
//!
//! The PDF pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts a `RenderRequest` to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use formlix_pdf::{Compiler, Transpiler};
//!
//! let typst_markup = Transpiler::transpile(&request);
//! let pdf_bytes = Compiler::compile_with_fonts(&typst_markup, &["fonts/Tinos-Regular.ttf"])?;
//! ```

mod compiler;
mod error;
mod transpiler;

use std::path::Path;

use formlix_ast::RenderRequest;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

/// Render a request to PDF without extra fonts
pub fn render_pdf(request: &RenderRequest) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile(request);
    Compiler::compile(&typst_markup)
}

/// Render a request to PDF with the given font files loaded
pub fn render_pdf_with_fonts<P: AsRef<Path>>(
    request: &RenderRequest,
    font_paths: &[P],
) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile(request);
    Compiler::compile_with_fonts(&typst_markup, font_paths)
}
