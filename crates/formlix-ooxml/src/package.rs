//! Fixed package parts
//!
//! Every report is written into a fresh package; these functions produce the
//! parts that do not depend on the outline body.

use formlix_ast::style::{half_points, twips};
use formlix_ast::StyleContract;

/// WordprocessingML main namespace
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// `w:numId` of the reference list
pub const NUMBERING_ID: u32 = 1;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// [Content_Types].xml
pub fn content_types_xml() -> String {
    format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
    )
}

/// _rels/.rels
pub fn root_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

/// word/_rels/document.xml.rels
pub fn document_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#
    )
}

/// word/styles.xml: document defaults carry the contract font and body size
pub fn styles_xml(style: &StyleContract) -> String {
    let font = escape_xml(style.font_family);
    let size = half_points(style.paragraph.size_pt);
    format!(
        r#"{XML_DECL}
<w:styles xmlns:w="{W_NS}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph">
    <w:name w:val="List Paragraph"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#
    )
}

/// word/numbering.xml: one decimal list ("1.", "2.", ...) for references
pub fn numbering_xml(style: &StyleContract, start: u32) -> String {
    let left = twips(style.references.indent_pt);
    let hanging = twips(style.references.hanging_pt);
    format!(
        r#"{XML_DECL}
<w:numbering xmlns:w="{W_NS}">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="decimal"/>
      <w:lvlText w:val="%1."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="{left}" w:hanging="{hanging}"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="{NUMBERING_ID}">
    <w:abstractNumId w:val="0"/>
    <w:lvlOverride w:ilvl="0"><w:startOverride w:val="{start}"/></w:lvlOverride>
  </w:num>
</w:numbering>"#
    )
}

/// docProps/core.xml
pub fn core_xml(title: &str) -> String {
    format!(
        r#"{XML_DECL}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>formlix</dc:creator>
</cp:coreProperties>"#,
        escape_xml(title)
    )
}

/// docProps/app.xml
pub fn app_xml() -> String {
    format!(
        r#"{XML_DECL}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
  <Application>formlix {}</Application>
</Properties>"#,
        crate::VERSION
    )
}

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_styles_use_contract_font() {
        let xml = styles_xml(&StyleContract::REPORT);
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn test_numbering_is_decimal_with_start() {
        let xml = numbering_xml(&StyleContract::REPORT, 1);
        assert!(xml.contains(r#"<w:numFmt w:val="decimal"/>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="%1."/>"#));
        assert!(xml.contains(r#"<w:startOverride w:val="1"/>"#));
        assert!(xml.contains(r#"w:left="720""#));
    }

    #[test]
    fn test_core_title_is_escaped() {
        let xml = core_xml("R&D <Report>");
        assert!(xml.contains("<dc:title>R&amp;D &lt;Report&gt;</dc:title>"));
    }

    #[test]
    fn test_content_types_cover_all_parts() {
        let xml = content_types_xml();
        for part in [
            "/word/document.xml",
            "/word/styles.xml",
            "/word/numbering.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(xml.contains(part), "missing override for {part}");
        }
    }
}
