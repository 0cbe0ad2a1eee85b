//! Paragraph inspection (word/document.xml)
//!
//! Reads back the body of a generated document as a flat list of paragraph
//! summaries, so tests can check layout without a word processor.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};

/// Layout-relevant facts about one `<w:p>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphSummary {
    /// Concatenated run text
    pub text: String,
    /// Paragraph style id (`w:pStyle`)
    pub style_id: Option<String>,
    /// Numbering instance (`w:numId`)
    pub num_id: Option<u32>,
    /// Paragraph alignment (`w:jc`)
    pub justification: Option<String>,
    /// First-line indent in twips
    pub first_line_indent: Option<u32>,
    /// Left indent in twips
    pub left_indent: Option<u32>,
    /// Space before in twips
    pub space_before: Option<u32>,
    /// Space after in twips
    pub space_after: Option<u32>,
    /// Font size of the first run in half-points
    pub size: Option<u32>,
    /// Any run is bold
    pub bold: bool,
    /// Contains a hard page break
    pub page_break: bool,
}

impl ParagraphSummary {
    /// Whether the paragraph is a list item
    pub fn is_numbered(&self) -> bool {
        self.num_id.is_some()
    }

    /// Whether the paragraph only carries a page break
    pub fn is_page_break(&self) -> bool {
        self.page_break && self.text.is_empty()
    }
}

/// Summarize every body paragraph of a document.xml part, in order
pub fn paragraphs(xml: &[u8]) -> Result<Vec<ParagraphSummary>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut result = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<ParagraphSummary> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => current = Some(ParagraphSummary::default()),
                b"t" => in_text = true,
                _ => {
                    if let Some(para) = current.as_mut() {
                        apply_property(para, e);
                    }
                }
            },
            Ok(Event::Empty(ref e)) => {
                if let Some(para) = current.as_mut() {
                    apply_property(para, e);
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(para) = current.as_mut() {
                        let text = e.unescape().unwrap_or_default();
                        para.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = current.take() {
                        result.push(para);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(result)
}

fn apply_property(para: &mut ParagraphSummary, e: &BytesStart) {
    match e.local_name().as_ref() {
        b"pStyle" => para.style_id = get_attr(e, b"w:val"),
        b"numId" => para.num_id = get_attr(e, b"w:val").and_then(|v| v.parse().ok()),
        b"jc" => para.justification = get_attr(e, b"w:val"),
        b"ind" => {
            if let Some(v) = get_attr(e, b"w:firstLine").and_then(|v| v.parse().ok()) {
                para.first_line_indent = Some(v);
            }
            if let Some(v) = get_attr(e, b"w:left").and_then(|v| v.parse().ok()) {
                para.left_indent = Some(v);
            }
        }
        b"spacing" => {
            if let Some(v) = get_attr(e, b"w:before").and_then(|v| v.parse().ok()) {
                para.space_before = Some(v);
            }
            if let Some(v) = get_attr(e, b"w:after").and_then(|v| v.parse().ok()) {
                para.space_after = Some(v);
            }
        }
        b"sz" if para.size.is_none() => {
            para.size = get_attr(e, b"w:val").and_then(|v| v.parse().ok());
        }
        b"b" => para.bold = true,
        b"br" => {
            if get_attr(e, b"w:type").as_deref() == Some("page") {
                para.page_break = true;
            }
        }
        _ => {}
    }
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}
