//! # docx-outline
//!
//! Paragraph-level outline extraction for Word documents.
//!
//! This library parses a `.docx` file and projects its body paragraphs onto
//! an outline: one entry per non-blank paragraph carrying the paragraph's
//! ordinal index, its style name, and its trimmed text. Blank paragraphs are
//! skipped but still consume index values, so entry indexes always reflect
//! positions in the full paragraph sequence.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx_outline::{extract_outline, parse_file};
//!
//! // One line per non-blank paragraph
//! for entry in extract_outline("document.docx")? {
//!     println!("{}", entry);
//! }
//!
//! // Full access to the paragraph sequence
//! let doc = parse_file("document.docx")?;
//! println!("Paragraphs: {}", doc.len());
//! # Ok::<(), docx_outline::Error>(())
//! ```

pub mod container;
pub mod docx;
pub mod error;
pub mod locate;
pub mod model;
pub mod outline;

// Re-exports
pub use container::DocxArchive;
pub use docx::{DocxParser, StyleMap};
pub use error::{Error, Result};
pub use locate::{find_default_document, SearchOptions};
pub use model::{DocxDocument, Paragraph};
pub use outline::{outline, write_outline, OutlineEntry};

use std::path::Path;

/// Parse a `.docx` file and return its paragraph sequence.
///
/// # Example
///
/// ```no_run
/// use docx_outline::parse_file;
///
/// let doc = parse_file("document.docx")?;
/// println!("Paragraphs: {}", doc.len());
/// # Ok::<(), docx_outline::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<DocxDocument> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a `.docx` document from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<DocxDocument> {
    let mut parser = DocxParser::from_bytes(data.to_vec())?;
    parser.parse()
}

/// Extract the outline of a `.docx` file.
///
/// # Example
///
/// ```no_run
/// use docx_outline::extract_outline;
///
/// for entry in extract_outline("document.docx")? {
///     println!("{}", entry);
/// }
/// # Ok::<(), docx_outline::Error>(())
/// ```
pub fn extract_outline(path: impl AsRef<Path>) -> Result<Vec<OutlineEntry>> {
    let doc = parse_file(path)?;
    Ok(outline::outline(&doc))
}
