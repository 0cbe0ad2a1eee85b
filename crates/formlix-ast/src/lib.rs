//! formlix-ast - Outline definitions
//!
//! This crate provides the renderer-agnostic types shared by the formlix
//! pipeline: the parsed [`Outline`], the immutable [`RenderRequest`] handed to
//! renderers, and the [`StyleContract`] both renderers apply.

pub mod outline;
pub mod request;
pub mod style;

pub use outline::{Block, Outline, Section, SectionRole};
pub use request::{ParseFormatError, RenderRequest, ReportFormat};
pub use style::{BorderStyle, HeadingStyle, ListStyle, PageStyle, ParagraphStyle, StyleContract};

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
