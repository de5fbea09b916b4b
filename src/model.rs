//! Document model: paragraphs in document order.

/// A single body paragraph.
///
/// Text is kept as stored in the document, including leading and trailing
/// whitespace; callers that want display text use [`Paragraph::trimmed_text`].
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Concatenated run text.
    pub text: String,

    /// Explicit style id from `w:pStyle` (e.g. "Heading1"), if any.
    pub style_id: Option<String>,

    /// Resolved style name (e.g. "Heading 1"), if any.
    pub style_name: Option<String>,
}

impl Paragraph {
    /// Create a paragraph with the given text and no style.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Check if the trimmed text is empty.
    pub fn is_blank(&self) -> bool {
        self.trimmed_text().is_empty()
    }

    /// The resolved style name, or the empty string when the paragraph has
    /// no associated style.
    pub fn style(&self) -> &str {
        self.style_name.as_deref().unwrap_or("")
    }
}

/// A parsed Word document: its body paragraphs in document order.
///
/// Empty paragraphs are retained so that a paragraph's position in
/// [`DocxDocument::paragraphs`] is its ordinal index in the document.
#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    /// Body paragraphs, including blank ones.
    pub paragraphs: Vec<Paragraph>,
}

impl DocxDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Total number of body paragraphs, blanks included.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
