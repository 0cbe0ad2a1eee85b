//! formlix-core - Report generation pipeline
//!
//! Turns a topic (or caller-supplied text) and a page target into a rendered
//! DOCX or PDF report:
//!
//! 1. [`source`] - obtain raw text from the content backend
//! 2. [`normalize`] - strip generation artifacts
//! 3. [`governor`] - enforce the page budget while keeping closing sections
//! 4. [`outline`] - parse text into an [`formlix_ast::Outline`]
//! 5. [`render`] - DOCX or PDF through one renderer interface
//! 6. [`storage`] - write the artifact
//!
//! [`fallback`] supplies complete report text whenever the backend fails.
//!
//! # Example
//!
//! ```
//! use formlix_core::{build_outline, fallback};
//!
//! let outline = build_outline(&fallback("Coral Reefs"), Some(1));
//! assert!(outline.conclusion().is_some());
//! assert!(outline.is_well_formed());
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod governor;
pub mod normalize;
pub mod outline;
pub mod prompt;
pub mod render;
pub mod source;
pub mod storage;

// Re-export main types and functions
pub use config::{BackendSettings, ConfigError, OutputSettings, PdfSettings, Settings};
pub use error::{ContentError, RenderError, ReportError, Result};
pub use fallback::fallback;
pub use generator::{build_outline, ContentOrigin, GeneratedReport, ReportGenerator, ReportRecord};
pub use governor::truncate;
pub use normalize::normalize;
pub use outline::parse_outline;
pub use prompt::build_prompt;
pub use render::{renderer_for, DocxRenderer, PdfRenderer, ReportRenderer};
pub use source::{ContentSource, HttpContentSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
