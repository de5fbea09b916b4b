//! DOCX (Word) document parsing.

pub mod parser;
pub mod styles;

pub use parser::DocxParser;
pub use styles::StyleMap;
