//! DOCX styles parsing.

use crate::error::Result;
use std::collections::HashMap;

/// A paragraph style definition from `word/styles.xml`.
#[derive(Debug, Clone, Default)]
pub struct Style {
    /// Style ID (e.g., "Heading1")
    pub id: String,
    /// Style name (e.g., "Heading 1")
    pub name: String,
}

/// Collection of paragraph styles from styles.xml.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    /// Styles by ID
    pub styles: HashMap<String, Style>,
    /// Default paragraph style ID
    pub default_paragraph: Option<String>,
}

impl StyleMap {
    /// Parse styles from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut map = StyleMap::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current_style: Option<Style> = None;
        let mut current_is_paragraph = false;
        let mut current_is_default = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => {
                    if e.name().as_ref() == b"w:style" {
                        let mut style = Style::default();
                        current_is_paragraph = false;
                        current_is_default = false;
                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"w:styleId" => {
                                    style.id = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                b"w:type" => {
                                    current_is_paragraph =
                                        String::from_utf8_lossy(&attr.value) == "paragraph";
                                }
                                b"w:default" => {
                                    let val = String::from_utf8_lossy(&attr.value);
                                    current_is_default = val == "1" || val == "true";
                                }
                                _ => {}
                            }
                        }
                        current_style = Some(style);
                    }
                }
                Ok(quick_xml::events::Event::Empty(e)) => {
                    if e.name().as_ref() == b"w:name" {
                        if let Some(ref mut style) = current_style {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"w:val" {
                                    style.name = String::from_utf8_lossy(&attr.value).to_string();
                                }
                            }
                        }
                    }
                }
                Ok(quick_xml::events::Event::End(e)) => {
                    if e.name().as_ref() == b"w:style" {
                        if let Some(style) = current_style.take() {
                            if current_is_paragraph && current_is_default {
                                map.default_paragraph = Some(style.id.clone());
                            }
                            map.styles.insert(style.id.clone(), style);
                        }
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Get a style's display name by ID, falling back to the raw ID when
    /// styles.xml does not name it.
    pub fn name_of(&self, id: &str) -> String {
        match self.styles.get(id) {
            Some(style) if !style.name.is_empty() => style.name.clone(),
            _ => id.to_string(),
        }
    }

    /// Resolve the style name for a paragraph.
    ///
    /// An explicit style id wins; a paragraph without one takes the default
    /// paragraph style's name when the document declares one, and no name
    /// otherwise.
    pub fn resolve_name(&self, style_id: Option<&str>) -> Option<String> {
        match style_id {
            Some(id) => Some(self.name_of(id)),
            None => self
                .default_paragraph
                .as_deref()
                .map(|id| self.name_of(id)),
        }
    }
}
