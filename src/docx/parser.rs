//! DOCX parser implementation.

use crate::container::DocxArchive;
use crate::error::{Error, Result};
use crate::model::{DocxDocument, Paragraph};

use super::styles::StyleMap;

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    archive: DocxArchive,
    styles: StyleMap,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let archive = DocxArchive::open(path)?;
        Self::from_archive(archive)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = DocxArchive::from_bytes(data)?;
        Self::from_archive(archive)
    }

    /// Create a parser from an archive.
    fn from_archive(archive: DocxArchive) -> Result<Self> {
        if !archive.exists("word/document.xml") {
            return Err(Error::NotWordDocument(
                "archive has no word/document.xml part".to_string(),
            ));
        }

        let styles = if let Ok(xml) = archive.read_xml("word/styles.xml") {
            StyleMap::parse(&xml)?
        } else {
            StyleMap::default()
        };

        Ok(Self { archive, styles })
    }

    /// Parse the document body and return the paragraph sequence.
    ///
    /// Every top-level body paragraph is retained, blank ones included, so a
    /// paragraph's position in the result is its ordinal index. Paragraphs
    /// nested inside tables are not body paragraphs and are excluded.
    pub fn parse(&mut self) -> Result<DocxDocument> {
        let xml = self.archive.read_xml("word/document.xml")?;
        let mut doc = DocxDocument::new();

        let mut reader = quick_xml::Reader::from_str(&xml);
        // Preserve whitespace from xml:space="preserve" runs
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut in_body = false;
        let mut table_depth: u32 = 0;
        let mut in_paragraph = false;
        let mut in_ppr = false;
        let mut in_text = false;
        let mut in_instr_text = false;
        let mut text = String::new();
        let mut style_id: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                    b"w:body" => in_body = true,
                    b"w:tbl" if in_body => table_depth += 1,
                    b"w:p" if in_body && table_depth == 0 => {
                        in_paragraph = true;
                        text.clear();
                        style_id = None;
                    }
                    b"w:pPr" if in_paragraph => in_ppr = true,
                    b"w:t" if in_paragraph => in_text = true,
                    b"w:instrText" if in_paragraph => in_instr_text = true,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                    // Word writes an empty paragraph as a self-closing element
                    b"w:p" if in_body && table_depth == 0 => {
                        doc.add_paragraph(self.finish_paragraph(String::new(), None));
                    }
                    b"w:pStyle" if in_ppr => {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"w:val" {
                                style_id = Some(String::from_utf8_lossy(&attr.value).to_string());
                            }
                        }
                    }
                    b"w:tab" if in_paragraph && !in_ppr => text.push('\t'),
                    b"w:br" | b"w:cr" if in_paragraph => text.push('\n'),
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(ref e)) => {
                    // Text belongs to w:t runs; w:instrText holds field codes
                    if in_text && !in_instr_text {
                        let chunk = e.unescape().unwrap_or_default();
                        text.push_str(&chunk);
                    }
                }
                Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                    b"w:body" => in_body = false,
                    b"w:tbl" if table_depth > 0 => table_depth -= 1,
                    b"w:p" if in_paragraph => {
                        let para = self.finish_paragraph(std::mem::take(&mut text), style_id.take());
                        doc.add_paragraph(para);
                        in_paragraph = false;
                    }
                    b"w:pPr" => in_ppr = false,
                    b"w:t" => in_text = false,
                    b"w:instrText" => in_instr_text = false,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(doc)
    }

    /// Build a paragraph record, resolving its style name.
    fn finish_paragraph(&self, text: String, style_id: Option<String>) -> Paragraph {
        let style_name = self.styles.resolve_name(style_id.as_deref());
        Paragraph {
            text,
            style_id,
            style_name,
        }
    }

    /// The style table read from `word/styles.xml`.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }
}
