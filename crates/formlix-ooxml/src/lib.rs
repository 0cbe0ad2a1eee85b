//! # formlix-ooxml
//!
//! DOCX rendering for formlix reports.
//!
//! The writer builds a complete WordprocessingML package from scratch (no
//! template): content types, relationships, styles, numbering for the
//! reference list, core properties and the document body. Layout follows
//! [`formlix_ast::StyleContract`].
//!
//! ## Example
//!
//! ```no_run
//! use formlix_ast::{Outline, RenderRequest, ReportFormat};
//! use formlix_ooxml::DocxWriter;
//!
//! let request = RenderRequest::new("Solar Energy", Outline::new(), None, ReportFormat::Docx);
//! let bytes = DocxWriter::generate(&request)?;
//! std::fs::write("report.docx", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod error;
pub mod inspect;
pub mod package;
pub mod writer;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use inspect::{paragraphs, ParagraphSummary};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
