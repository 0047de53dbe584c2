//! Named text styles and color tokens.
//!
//! Every imported document carries a fixed default style table: the
//! canonical working presets of the target editing environment, not
//! properties recovered from the source PDF. The defaults live here as a
//! constant constructor so callers pass them explicitly; there is no shared
//! mutable style state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named text style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u32,
    /// Hex color string, e.g. "#0f172a".
    pub color: String,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f64, weight: u32, color: impl Into<String>) -> Self {
        Self {
            font_family: family.into(),
            font_size: size,
            font_weight: weight,
            color: color.into(),
        }
    }
}

/// The document style table: named text styles plus named color tokens.
///
/// Maps are ordered so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTable {
    pub text_styles: BTreeMap<String, TextStyle>,
    pub color_tokens: BTreeMap<String, String>,
}

impl StyleTable {
    /// The fixed heading/body/caption presets baked into every import.
    pub fn magazine_defaults() -> Self {
        let mut text_styles = BTreeMap::new();
        text_styles.insert(
            "H1".to_string(),
            TextStyle::new("Inter", 40.0, 800, "#0f172a"),
        );
        text_styles.insert(
            "H2".to_string(),
            TextStyle::new("Inter", 26.0, 750, "#0f172a"),
        );
        text_styles.insert(
            "Body".to_string(),
            TextStyle::new("Inter", 13.0, 450, "#111827"),
        );
        text_styles.insert(
            "Caption".to_string(),
            TextStyle::new("Inter", 11.0, 500, "#64748b"),
        );

        let mut color_tokens = BTreeMap::new();
        color_tokens.insert("accent".to_string(), "#5b8cff".to_string());
        color_tokens.insert("ink".to_string(), "#0f172a".to_string());

        Self {
            text_styles,
            color_tokens,
        }
    }

    /// Look up a text style by name.
    pub fn text_style(&self, name: &str) -> Option<&TextStyle> {
        self.text_styles.get(name)
    }
}
