//! Document-level types: the root of the scene graph.

use super::page::Page;
use super::style::StyleTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// An editable scene-graph document: pages → layers → items.
///
/// A plain value tree. Nothing here back-references its container and the
/// producing pipeline holds no reference after returning it; ownership is
/// entirely the caller's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document id.
    pub id: String,

    /// Page format tag, e.g. "A4".
    pub format: String,

    /// Whether pages are laid out as spreads in the editor.
    pub spreads: bool,

    pub settings: DocumentSettings,

    pub styles: StyleTable,

    /// Pages in reading order.
    pub pages: Vec<Page>,

    /// Reserved for future use; always serialized so the editor contract
    /// stays stable.
    #[serde(default)]
    pub components_library: Vec<serde_json::Value>,

    /// Reserved for future use.
    #[serde(default)]
    pub variables: BTreeMap<String, serde_json::Value>,

    pub generator: GeneratorInfo,
}

impl Document {
    /// Create an empty A4 document with the canonical working defaults and
    /// a fresh id.
    pub fn with_defaults(generator: GeneratorInfo) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            format: "A4".to_string(),
            spreads: true,
            settings: DocumentSettings::magazine_defaults(),
            styles: StyleTable::magazine_defaults(),
            pages: Vec::new(),
            components_library: Vec::new(),
            variables: BTreeMap::new(),
            generator,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get a page by zero-based index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }
}

/// Global document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSettings {
    /// Mirror inner/outer margins on facing pages.
    pub margins_mirror: bool,

    /// Default bleed in millimeters.
    pub bleed_mm: f64,

    /// Whether crop marks are requested by default.
    pub crop_marks: bool,

    /// Color mode tag, e.g. "RGB".
    pub color_mode: String,

    /// Nominal page width in points. Export falls back to A4 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_width: Option<f64>,

    /// Nominal page height in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<f64>,
}

impl DocumentSettings {
    /// Fixed working defaults applied to every imported document.
    pub fn magazine_defaults() -> Self {
        Self {
            margins_mirror: true,
            bleed_mm: 3.0,
            crop_marks: true,
            color_mode: "RGB".to_string(),
            page_width: None,
            page_height: None,
        }
    }
}

/// Metadata about the pipeline that produced a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorInfo {
    /// Producing pipeline version tag, e.g. "import-v2".
    pub version: String,
    pub mode: String,
    pub preset: String,
}

impl GeneratorInfo {
    pub fn new(
        version: impl Into<String>,
        mode: impl Into<String>,
        preset: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            mode: mode.into(),
            preset: preset.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_with_defaults() {
        let doc = Document::with_defaults(GeneratorInfo::new("import-v2", "safe", "smart"));
        assert!(doc.is_empty());
        assert_eq!(doc.format, "A4");
        assert!(doc.spreads);
        assert_eq!(doc.settings.bleed_mm, 3.0);
        assert!(doc.settings.crop_marks);
        assert!(!doc.id.is_empty());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let gen = GeneratorInfo::new("import-v2", "safe", "smart");
        let a = Document::with_defaults(gen.clone());
        let b = Document::with_defaults(gen);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_settings_wire_names() {
        let json = serde_json::to_value(DocumentSettings::magazine_defaults()).unwrap();
        assert_eq!(json["marginsMirror"], true);
        assert_eq!(json["bleedMm"], 3.0);
        assert_eq!(json["cropMarks"], true);
        assert_eq!(json["colorMode"], "RGB");
        // Absent page size must not appear on the wire.
        assert!(json.get("pageWidth").is_none());
    }

    #[test]
    fn test_document_roundtrip() {
        let mut doc = Document::with_defaults(GeneratorInfo::new("import-v2", "safe", "smart"));
        doc.add_page(crate::model::Page::new("p-0", "Imported"));

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.page_count(), 1);
        assert_eq!(back.page(0).unwrap().id, "p-0");
    }
}
