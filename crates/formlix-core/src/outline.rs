//! Outline parser
//!
//! Turns normalized report text into an [`Outline`]. The input format is the
//! one the prompt asks for:
//!
//! ```text
//! ## Introduction
//! ### Background and Context
//! Paragraph text...
//!
//! ## Conclusion
//! Closing paragraph...
//!
//! ## References
//! 1. Author, A. (2024). Title. Journal.
//! ```
//!
//! Parsing is line based and never fails; text before the first `## `
//! heading is dropped.

use std::sync::OnceLock;

use formlix_ast::{Block, Outline, Section, SectionRole};
use regex::Regex;

/// Level-1 heading marker
const SECTION_MARKER: &str = "## ";
/// Level-2 heading marker
const SUBSECTION_MARKER: &str = "### ";

/// Where the parser currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first heading; lines are discarded
    Preamble,
    Body,
    InConclusion,
    InReferences,
}

impl From<SectionRole> for ParseState {
    fn from(role: SectionRole) -> Self {
        match role {
            SectionRole::Body => ParseState::Body,
            SectionRole::Conclusion => ParseState::InConclusion,
            SectionRole::References => ParseState::InReferences,
        }
    }
}

/// Parse report text into an outline
pub fn parse_outline(text: &str) -> Outline {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    let reference_re = REFERENCE_RE.get_or_init(|| Regex::new(r"^\d+\.\s*").unwrap());

    let mut outline = Outline::new();
    let mut state = ParseState::Preamble;
    let mut ordinal = 0u32;

    // lines() also strips the '\r' of CRLF endings
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // "### " also starts with "##", so test the deeper marker first
        if let Some(name) = trimmed.strip_prefix(SUBSECTION_MARKER) {
            if matches!(state, ParseState::Body | ParseState::InReferences) {
                if let Some(section) = outline.sections.last_mut() {
                    section.push(Block::subheading(name.trim()));
                }
            }
            continue;
        }

        if let Some(name) = trimmed.strip_prefix(SECTION_MARKER) {
            let section = Section::new(name.trim());
            state = ParseState::from(section.role);
            outline.push(section);
            continue;
        }

        let Some(section) = outline.sections.last_mut() else {
            continue;
        };

        match state {
            ParseState::Preamble => {}
            ParseState::InReferences if reference_re.is_match(trimmed) => {
                ordinal += 1;
                let entry = reference_re.replace(trimmed, "");
                section.push(Block::reference(ordinal, entry.trim()));
            }
            ParseState::Body | ParseState::InConclusion | ParseState::InReferences => {
                section.push(Block::paragraph(trimmed));
            }
        }
    }

    outline
}
