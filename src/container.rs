//! ZIP container access for `.docx` packages.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Read-only view over the ZIP archive that backs a `.docx` file.
///
/// Word documents are OPC packages: a ZIP archive of XML parts. This type
/// resolves parts by name and decodes them to UTF-8 text regardless of the
/// encoding they were stored with.
pub struct DocxArchive {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl DocxArchive {
    /// Open an archive from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docx_outline::container::DocxArchive;
    ///
    /// let archive = DocxArchive::open("report.docx")?;
    /// # Ok::<(), docx_outline::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an archive from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read a part from the archive as decoded XML text.
    ///
    /// Handles UTF-8 (with or without BOM) and UTF-16 LE/BE parts.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingPart(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let exists = archive.file_names().any(|n| n == path);
        exists
    }

    /// List all part names in the archive.
    pub fn part_names(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for DocxArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxArchive")
            .field("parts", &self.part_names().len())
            .finish()
    }
}

/// Decode XML bytes handling different encodings (UTF-8, UTF-16 LE/BE).
///
/// OOXML parts are typically UTF-8, but documents produced by some tools
/// store their XML as UTF-16.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.len() >= 3 && bytes[0] == 0xEF && bytes[1] == 0xBB && bytes[2] == 0xBF {
        // UTF-8 BOM
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }

    if bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] == 0xFE {
        // UTF-16 LE BOM
        let content = decode_utf16(&bytes[2..], u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE BOM
        let content = decode_utf16(&bytes[2..], u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            // No BOM: UTF-16 text with ASCII content has null bytes at
            // alternating positions.
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                let content = decode_utf16(bytes, u16::from_le_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                let content = decode_utf16(bytes, u16::from_be_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    // Ignore a trailing odd byte
    let len = bytes.len() & !1;

    let u16_iter = (0..len)
        .step_by(2)
        .map(|i| from_bytes([bytes[i], bytes[i + 1]]));

    char::decode_utf16(u16_iter)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Rewrite encoding="UTF-16" to UTF-8 in the XML declaration.
///
/// After decoding UTF-16 bytes to a Rust String the declaration still claims
/// UTF-16, which makes quick-xml reinterpret the already-decoded text.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}
