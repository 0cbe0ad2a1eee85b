//! Error types for the report pipeline

use thiserror::Error;

use formlix_ooxml::OoxmlError;
use formlix_pdf::PdfError;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Content backend failures
///
/// Never fatal: the generator substitutes fallback text.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Backend could not be reached or answered with an error
    #[error("content backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend answered, but with too little usable text
    #[error("content backend returned insufficient text: {0}")]
    BackendInsufficient(String),
}

/// Rendering and artifact write failures
#[derive(Error, Debug)]
pub enum RenderError {
    /// DOCX package generation failed
    #[error("DOCX rendering failed: {0}")]
    Docx(#[from] OoxmlError),

    /// PDF compilation failed
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] PdfError),

    /// Artifact could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned to callers of the report generator
#[derive(Error, Debug)]
pub enum ReportError {
    /// Topic was empty or blank
    #[error("topic is required")]
    MissingTopic,

    /// Caller-supplied content was empty or blank
    #[error("content is required")]
    MissingContent,

    /// Page limit outside 1..=20
    #[error("page limit must be between 1 and 20, got {0}")]
    InvalidPageLimit(u32),

    /// Rendering or writing the artifact failed
    #[error(transparent)]
    Render(#[from] RenderError),
}
