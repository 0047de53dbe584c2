//! Positioned visual items: the leaves of the scene graph.
//!
//! `Item` is a tagged sum type with a common rectangle so rendering can be
//! exhaustive over the four kinds. The `type` tag and field names are the
//! wire contract of the downstream editor; legacy tag spellings (`Rect`,
//! `Rectangle`, `LockedLogoStamp`) deserialize through aliases.

use super::geometry::{Color, Rect};
use serde::{Deserialize, Serialize};

/// A positioned visual primitive on a layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable item id, unique within the document.
    pub id: String,

    /// Bounding rectangle in canonical page points, already bleed-offset.
    pub rect: Rect,

    /// Type-specific payload, tagged as `type` on the wire.
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<String>, rect: Rect, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            rect,
            kind,
        }
    }

    /// The wire tag of this item's kind.
    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            ItemKind::Shape { .. } => "Shape",
            ItemKind::Line { .. } => "Line",
            ItemKind::ImageFrame { .. } => "ImageFrame",
            ItemKind::TextFrame { .. } => "TextFrame",
        }
    }

    /// Collected text of a text frame: styled runs take precedence over the
    /// plain field, concatenated and trimmed. Empty for every other kind.
    pub fn plain_text(&self) -> String {
        match &self.kind {
            ItemKind::TextFrame {
                rich_text_runs: Some(runs),
                ..
            } if !runs.is_empty() => runs
                .iter()
                .map(|r| r.text.as_str())
                .collect::<String>()
                .trim()
                .to_string(),
            ItemKind::TextFrame {
                text: Some(content),
                ..
            } => content.plain_text().trim().to_string(),
            _ => String::new(),
        }
    }
}

/// Type-specific item payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    /// A filled and/or stroked rectangle. An absent channel is not painted.
    #[serde(alias = "Rect", alias = "Rectangle")]
    Shape {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Color>,
        #[serde(default, rename = "strokeWidth")]
        stroke_width: f64,
    },

    /// A stroked segment from the rectangle's top-left corner to an explicit
    /// endpoint, or to the rectangle's bottom-right corner when absent.
    Line {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Color>,
        #[serde(default = "default_line_width", rename = "strokeWidth")]
        stroke_width: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x2: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y2: Option<f64>,
    },

    /// A placed image, referenced through the blob store.
    #[serde(alias = "LockedLogoStamp")]
    ImageFrame {
        /// Opaque asset id, resolvable through the store collaborator.
        #[serde(rename = "assetRef", alias = "assetId")]
        asset_ref: String,
        #[serde(default, rename = "fitMode")]
        fit_mode: FitMode,
        /// Normalized crop box (0..1 fractions). Informational for renderers.
        #[serde(default = "Rect::unit")]
        crop: Rect,
        /// Editing lock for downstream editors. Never affects rendering.
        #[serde(default)]
        locked: bool,
        /// Editor-facing role tag, e.g. `pdf_background`, `imported_image`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
    },

    /// A box of text, styled runs or a plain string.
    TextFrame {
        #[serde(
            default,
            rename = "richTextRuns",
            skip_serializing_if = "Option::is_none"
        )]
        rich_text_runs: Option<Vec<TextRun>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<TextContent>,
        /// Named style in the document's style table.
        #[serde(default, rename = "styleRef", skip_serializing_if = "Option::is_none")]
        style_ref: Option<String>,
        #[serde(default, rename = "fontSize", skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(default)]
        align: Align,
        #[serde(default)]
        padding: f64,
    },
}

fn default_line_width() -> f64 {
    1.0
}

/// How an image should fill its frame. Informational at render time: the
/// exporter always stretches to the frame rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
    Stretch,
}

/// Horizontal text alignment inside a text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Text frame content: either a plain string or a list of styled runs.
///
/// Older documents carry a run list under the `text` key; both shapes
/// deserialize here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    Plain(String),
    Runs(Vec<TextRun>),
}

impl TextContent {
    /// Concatenated text of this content, unstyled.
    pub fn plain_text(&self) -> String {
        match self {
            TextContent::Plain(s) => s.clone(),
            TextContent::Runs(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

/// An inline text fragment with optional formatting marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,

    /// Open-ended formatting marks (bold, italic, ...). Preserved verbatim
    /// for the editor; the exporter does not interpret them.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub marks: serde_json::Map<String, serde_json::Value>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: serde_json::Map::new(),
        }
    }
}
