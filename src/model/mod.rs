//! The scene-graph document model.
//!
//! This is the contract between import and export: the importer produces a
//! [`Document`], the exporter consumes one. Field names follow the wire
//! contract consumed by the downstream editor (camelCase JSON).

mod document;
mod geometry;
mod item;
mod page;
mod style;

pub use document::{Document, DocumentSettings, GeneratorInfo};
pub use geometry::{Color, Rect, A4_HEIGHT_PT, A4_WIDTH_PT, MM_TO_PT};
pub use item::{Align, FitMode, Item, ItemKind, TextContent, TextRun};
pub use page::{Layer, Page, PageBackground};
pub use style::{StyleTable, TextStyle};
