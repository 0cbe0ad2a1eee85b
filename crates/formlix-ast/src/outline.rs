//! Outline structure
//!
//! An [`Outline`] is the structured form of one report: an ordered list of
//! sections, each classified by role, each holding a flat list of blocks.

use serde::{Deserialize, Serialize};

/// Layout role of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionRole {
    /// Regular body section (introduction, methodology, ...)
    #[default]
    Body,
    /// The closing summary; rendered as flat paragraphs
    Conclusion,
    /// The numbered bibliography
    References,
}

impl SectionRole {
    /// Classify a section by its heading text.
    ///
    /// Matching is a case-insensitive substring test. A name mentioning both
    /// keywords is treated as references.
    pub fn from_heading(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("reference") {
            SectionRole::References
        } else if lower.contains("conclusion") {
            SectionRole::Conclusion
        } else {
            SectionRole::Body
        }
    }

    /// Whether the section starts on a fresh page
    pub fn starts_new_page(self) -> bool {
        matches!(self, SectionRole::Conclusion | SectionRole::References)
    }
}

/// Content element inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A level-2 heading
    Subheading { name: String },
    /// A paragraph of running text
    Paragraph { text: String },
    /// A bibliography entry; `ordinal` is its 1-based position in the list
    ReferenceItem { ordinal: u32, text: String },
}

impl Block {
    /// Create a subheading block
    pub fn subheading(name: impl Into<String>) -> Self {
        Block::Subheading { name: name.into() }
    }

    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a reference entry
    pub fn reference(ordinal: u32, text: impl Into<String>) -> Self {
        Block::ReferenceItem {
            ordinal,
            text: text.into(),
        }
    }

    /// Text carried by the block
    pub fn text(&self) -> &str {
        match self {
            Block::Subheading { name } => name,
            Block::Paragraph { text } | Block::ReferenceItem { text, .. } => text,
        }
    }
}

/// A top-level section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text without markup
    pub name: String,
    /// Layout role derived from the name
    pub role: SectionRole,
    /// Section content in source order
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create an empty section, inferring its role from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let role = SectionRole::from_heading(&name);
        Self {
            name,
            role,
            blocks: Vec::new(),
        }
    }

    /// Append a block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Reference entries of this section, in order
    pub fn references(&self) -> impl Iterator<Item = (u32, &str)> {
        self.blocks.iter().filter_map(|b| match b {
            Block::ReferenceItem { ordinal, text } => Some((*ordinal, text.as_str())),
            _ => None,
        })
    }

    /// Whether the section holds any subheading
    pub fn has_subheadings(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Subheading { .. }))
    }
}

/// A complete report outline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Sections in document order
    pub sections: Vec<Section>,
}

impl Outline {
    /// Create an empty outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the outline has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Roles of all sections, in order
    pub fn roles(&self) -> Vec<SectionRole> {
        self.sections.iter().map(|s| s.role).collect()
    }

    /// First section with the given role
    pub fn section_with_role(&self, role: SectionRole) -> Option<&Section> {
        self.sections.iter().find(|s| s.role == role)
    }

    /// The conclusion section, if any
    pub fn conclusion(&self) -> Option<&Section> {
        self.section_with_role(SectionRole::Conclusion)
    }

    /// The references section, if any
    pub fn references(&self) -> Option<&Section> {
        self.section_with_role(SectionRole::References)
    }

    /// Total number of reference entries across the outline
    pub fn reference_count(&self) -> usize {
        self.sections.iter().map(|s| s.references().count()).sum()
    }

    /// Check the ordering invariant.
    ///
    /// At most one conclusion and one references section; references, when
    /// present, is last and a conclusion (if any) sits directly before it.
    pub fn is_well_formed(&self) -> bool {
        let roles = self.roles();
        let count = |role| roles.iter().filter(|r| **r == role).count();
        if count(SectionRole::Conclusion) > 1 || count(SectionRole::References) > 1 {
            return false;
        }

        match roles.iter().position(|r| *r == SectionRole::References) {
            Some(refs) if refs + 1 != roles.len() => false,
            Some(refs) => match roles.iter().position(|r| *r == SectionRole::Conclusion) {
                Some(concl) => concl + 1 == refs,
                None => true,
            },
            None => true,
        }
    }
}
