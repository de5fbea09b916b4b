//! End-to-end outline extraction over synthetic DOCX fixtures.
//!
//! Each test builds a small in-memory package (ZIP with the usual OPC parts)
//! and checks the outline projection against it.

use docx_outline::{outline, parse_bytes, write_outline, SearchOptions};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:style w:type="paragraph" w:styleId="Normal">
        <w:name w:val="Normal"/>
    </w:style>
    <w:style w:type="paragraph" w:styleId="Heading1">
        <w:name w:val="Heading 1"/>
    </w:style>
</w:styles>"#;

/// Build a document.xml body from (style id, text) pairs. An empty style id
/// produces a paragraph without w:pStyle.
fn document_xml(paragraphs: &[(&str, &str)]) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for (style, text) in paragraphs {
        content.push_str("\n    <w:p>");
        if !style.is_empty() {
            content.push_str(&format!(
                "<w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>",
                style
            ));
        }
        if !text.is_empty() {
            content.push_str(&format!(
                "<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>",
                text
            ));
        }
        content.push_str("</w:p>");
    }

    content.push_str("\n  </w:body>\n</w:document>");
    content
}

fn build_docx(document_xml: &str, styles_xml: Option<&str>) -> Vec<u8> {
    build_docx_raw(document_xml.as_bytes(), styles_xml)
}

fn build_docx_raw(document_xml: &[u8], styles_xml: Option<&str>) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(RELS.as_bytes()).unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml).unwrap();

    if let Some(styles) = styles_xml {
        zip.start_file("word/styles.xml", options).unwrap();
        zip.write_all(styles.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer
}

#[test]
fn end_to_end_scenario() {
    // Paragraphs ["", "Title", "  ", "Body text"] with styles
    // ["Normal", "Heading 1", "Normal", "Normal"]
    let xml = document_xml(&[
        ("Normal", ""),
        ("Heading1", "Title"),
        ("Normal", "  "),
        ("Normal", "Body text"),
    ]);
    let doc = parse_bytes(&build_docx(&xml, Some(STYLES_XML))).unwrap();

    let mut out = Vec::new();
    write_outline(&doc, &mut out).unwrap();
    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();

    assert_eq!(
        lines,
        vec![
            "0001 | Heading 1 | Title".to_string(),
            "0003 | Normal | Body text".to_string(),
        ]
    );
}

#[test]
fn emitted_lines_match_non_blank_paragraphs() {
    let xml = document_xml(&[
        ("", "one"),
        ("", ""),
        ("", "two"),
        ("", "   "),
        ("", "three"),
        ("", ""),
    ]);
    let doc = parse_bytes(&build_docx(&xml, None)).unwrap();

    let non_blank = doc.paragraphs.iter().filter(|p| !p.is_blank()).count();
    let entries = outline(&doc);
    assert_eq!(entries.len(), non_blank);
    assert_eq!(entries.len(), 3);
}

#[test]
fn indexes_count_all_paragraphs() {
    let xml = document_xml(&[("", ""), ("", ""), ("", "late")]);
    let doc = parse_bytes(&build_docx(&xml, None)).unwrap();

    let entries = outline(&doc);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, 2);
}

#[test]
fn unstyled_paragraph_has_empty_style_field() {
    // No default paragraph style declared, no explicit w:pStyle
    let styles = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:style w:type="paragraph" w:styleId="Heading1">
        <w:name w:val="Heading 1"/>
    </w:style>
</w:styles>"#;
    let xml = document_xml(&[("", "plain paragraph")]);
    let doc = parse_bytes(&build_docx(&xml, Some(styles))).unwrap();

    let entries = outline(&doc);
    assert_eq!(entries[0].style, "");
    assert_eq!(entries[0].to_string(), "0000 |  | plain paragraph");
}

#[test]
fn unstyled_paragraph_takes_declared_default_style() {
    let styles = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
        <w:name w:val="Normal"/>
    </w:style>
</w:styles>"#;
    let xml = document_xml(&[("", "plain paragraph")]);
    let doc = parse_bytes(&build_docx(&xml, Some(styles))).unwrap();

    assert_eq!(outline(&doc)[0].style, "Normal");
}

#[test]
fn unknown_style_id_falls_back_to_raw_id() {
    let xml = document_xml(&[("Quote", "quoted")]);
    let doc = parse_bytes(&build_docx(&xml, Some(STYLES_XML))).unwrap();

    assert_eq!(outline(&doc)[0].style, "Quote");
}

#[test]
fn table_paragraphs_do_not_consume_indexes() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>before</w:t></w:r></w:p>
    <w:tbl>
      <w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr>
    </w:tbl>
    <w:p><w:r><w:t>after</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
    let doc = parse_bytes(&build_docx(xml, None)).unwrap();

    let entries = outline(&doc);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].to_string(), "0000 |  | before");
    assert_eq!(entries[1].to_string(), "0001 |  | after");
}

#[test]
fn utf16_document_part_decodes_transparently() {
    let xml = document_xml(&[("Heading1", "Title")]);

    // Re-encode the document part as UTF-16 LE with a BOM
    let mut utf16: Vec<u8> = vec![0xFF, 0xFE];
    for unit in xml.encode_utf16() {
        utf16.extend_from_slice(&unit.to_le_bytes());
    }

    let doc = parse_bytes(&build_docx_raw(&utf16, Some(STYLES_XML))).unwrap();
    assert_eq!(outline(&doc)[0].to_string(), "0000 | Heading 1 | Title");
}

#[test]
fn parse_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.docx");
    let xml = document_xml(&[("Heading1", "Title")]);
    std::fs::write(&path, build_docx(&xml, Some(STYLES_XML))).unwrap();

    let entries = docx_outline::extract_outline(&path).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Title");
}

#[test]
fn default_search_finds_document_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let xml = document_xml(&[("", "hello")]);
    std::fs::write(dir.path().join("Meeting-Notes.docx"), build_docx(&xml, None)).unwrap();
    std::fs::write(dir.path().join("unrelated.txt"), b"nope").unwrap();

    let options = SearchOptions::new().with_name_contains("notes");
    let found = docx_outline::find_default_document(dir.path(), &options)
        .unwrap()
        .expect("should match case-insensitively");
    assert!(found.ends_with("Meeting-Notes.docx"));

    let entries = docx_outline::extract_outline(&found).unwrap();
    assert_eq!(entries[0].text, "hello");
}

#[test]
fn non_docx_zip_is_rejected() {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("mimetype", options).unwrap();
    zip.write_all(b"application/epub+zip").unwrap();
    zip.finish().unwrap();

    let result = parse_bytes(&buffer);
    assert!(matches!(
        result,
        Err(docx_outline::Error::NotWordDocument(_))
    ));
}
