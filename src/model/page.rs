//! Pages and layers.

use super::item::Item;
use super::Color;
use serde::{Deserialize, Serialize};

/// A single page: an ordered stack of layers rendered bottom-to-top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Stable page id.
    pub id: String,

    /// Free-form section tag (e.g. "Imported", "Cover").
    #[serde(default, rename = "sectionType")]
    pub section_type: String,

    /// Optional full-page background paint, drawn before any layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PageBackground>,

    /// Layers in paint order.
    pub layers: Vec<Layer>,
}

impl Page {
    pub fn new(id: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section_type: section_type.into(),
            background: None,
            layers: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Total item count across layers.
    pub fn item_count(&self) -> usize {
        self.layers.iter().map(|l| l.items.len()).sum()
    }

    /// Find a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}

/// Full-page background paint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBackground {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
}

/// A named group of items.
///
/// `locked` governs editing only and never suppresses rendering;
/// `visible = false` always does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default)]
    pub locked: bool,

    /// Items in paint order (painter's algorithm, no z-index).
    pub items: Vec<Item>,
}

impl Layer {
    /// Create an empty visible, unlocked layer.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            locked: false,
            items: Vec::new(),
        }
    }

    /// Create an empty visible, locked layer.
    pub fn locked(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            locked: true,
            ..Self::new(id, name)
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn default_true() -> bool {
    true
}
