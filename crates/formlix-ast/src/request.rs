//! Render requests and output formats

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::outline::Outline;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// WordprocessingML package
    #[default]
    Docx,
    /// Fixed-layout PDF
    Pdf,
}

impl ReportFormat {
    /// All supported formats
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Docx, ReportFormat::Pdf];

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Pdf => "pdf",
        }
    }

    /// MIME type served for artifacts of this format
    pub fn mime_type(self) -> &'static str {
        match self {
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }

    /// Look up a format by file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when parsing an unknown format name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError(pub String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported report format: {} (expected docx or pdf)", self.0)
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for ReportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

/// Everything a renderer needs to produce one artifact.
///
/// Immutable once built; renderers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    topic: String,
    outline: Outline,
    page_limit: Option<u32>,
    format: ReportFormat,
}

impl RenderRequest {
    /// Create a render request
    pub fn new(
        topic: impl Into<String>,
        outline: Outline,
        page_limit: Option<u32>,
        format: ReportFormat,
    ) -> Self {
        Self {
            topic: topic.into(),
            outline,
            page_limit,
            format,
        }
    }

    /// Report topic as supplied by the caller
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Title line rendered at the top of the document
    pub fn title(&self) -> String {
        self.topic.to_uppercase()
    }

    /// Parsed outline
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Requested page limit
    pub fn page_limit(&self) -> Option<u32> {
        self.page_limit
    }

    /// Target format
    pub fn format(&self) -> ReportFormat {
        self.format
    }
}
