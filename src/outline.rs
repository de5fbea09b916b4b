//! Outline projection over a parsed document.
//!
//! The outline is the ordered list of non-blank paragraphs with their style
//! names, used as a quick structural summary of a document. Indexes reflect
//! each paragraph's position among *all* body paragraphs, so skipped blank
//! paragraphs still consume index values.

use crate::model::DocxDocument;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// One outline line: a non-blank paragraph's ordinal position, style name,
/// and trimmed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Zero-based position among all body paragraphs.
    pub index: usize,
    /// Resolved style name; empty when the paragraph has no associated style.
    pub style: String,
    /// Trimmed paragraph text, never empty.
    pub text: String,
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} | {} | {}", self.index, self.style, self.text)
    }
}

/// Project a document onto its outline.
pub fn outline(doc: &DocxDocument) -> Vec<OutlineEntry> {
    doc.paragraphs
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_blank())
        .map(|(index, p)| OutlineEntry {
            index,
            style: p.style().to_string(),
            text: p.trimmed_text().to_string(),
        })
        .collect()
}

/// Stream the outline of a document as formatted lines.
pub fn write_outline<W: io::Write>(doc: &DocxDocument, mut writer: W) -> io::Result<()> {
    for entry in outline(doc) {
        writeln!(writer, "{}", entry)?;
    }
    Ok(())
}

/// Render outline entries as a JSON array.
pub fn to_json(entries: &[OutlineEntry], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    }
}
