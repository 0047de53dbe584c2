//! The narrow interface to the external PDF codec engine.
//!
//! scenepdf does not tokenize or render PDF content itself. The import
//! pipeline consumes a [`PdfEngine`]/[`SourcePdf`] pair for rasterization
//! and structured extraction; the export pipeline drives a [`PdfCanvas`]
//! with drawing primitives. Real codecs (MuPDF bindings, a remote render
//! service, ...) implement these traits outside this crate; the test suite
//! ships in-memory fakes.

use std::path::Path;

use crate::error::Result;
use crate::model::{Align, Color, Rect};

/// Import-side entry point: opens raw bytes into a decoded source document.
pub trait PdfEngine {
    /// The decoded document handle. Dropped when the import returns, on
    /// every exit path.
    type Source: SourcePdf;

    /// Decode a source document. A corrupt or unreadable file is a hard
    /// failure; the importer returns no partial document.
    fn open(&self, data: &[u8]) -> Result<Self::Source>;
}

/// A decoded source PDF the importer can query page by page.
///
/// All coordinates are in the source page's native space, origin top-left,
/// units in source page points.
pub trait SourcePdf {
    fn page_count(&self) -> usize;

    /// Native (width, height) of a page in points.
    fn page_size(&self, index: usize) -> Result<(f64, f64)>;

    /// Render a full page to an encoded raster (PNG bytes) at the given
    /// oversampling scale.
    fn rasterize(&self, index: usize, scale: f64) -> Result<Vec<u8>>;

    /// Codec-level text grouping with bounding boxes.
    fn text_blocks(&self, index: usize) -> Result<Vec<TextBlock>>;

    /// Distinct embedded image objects on a page with their placements.
    fn image_objects(&self, index: usize) -> Result<Vec<ImageObject>>;
}

/// A block of extracted text: lines of spans plus a bounding box.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// Bounding box in source page coordinates.
    pub bbox: Rect,

    /// Lines, each a sequence of span strings in reading order.
    pub lines: Vec<Vec<String>>,
}

impl TextBlock {
    /// Join spans per line, drop whitespace-only lines, join with newlines.
    pub fn collected_text(&self) -> String {
        self.lines
            .iter()
            .map(|spans| spans.concat())
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An embedded image object extracted from a source page.
#[derive(Debug, Clone)]
pub struct ImageObject {
    /// Source object identity (PDF cross-reference number). The importer
    /// deduplicates ingestion by this id within one run.
    pub object_id: u64,

    /// Raw encoded image bytes as stored in the source.
    pub data: Vec<u8>,

    /// Ink channel count of the stored representation; 5 or more means a
    /// CMYK-plus color space that needs RGB conversion before ingestion.
    pub ink_channels: u8,

    /// Placement rectangles on the page, source coordinates. An object may
    /// be placed multiple times.
    pub placements: Vec<Rect>,
}

/// Output byte-size tier for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Screen-oriented output; the codec may apply its incremental-save
    /// optimization. No semantic effect on content.
    #[default]
    Web,
    /// Print-oriented output, serialized as-is.
    Print,
}

/// Export-side drawing surface for one in-progress PDF.
///
/// The exporter issues pages and primitives strictly in document order and
/// hands in colors already normalized to unit range. The canvas is consumed
/// by [`finish`](PdfCanvas::finish), releasing the output buffer on every
/// path.
pub trait PdfCanvas {
    /// Append a new page of the given size in points. Failure here aborts
    /// the export.
    fn new_page(&mut self, width: f64, height: f64) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) -> Result<()>;

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64)
        -> Result<()>;

    /// Place an image file stretched to exactly fill `rect`.
    fn place_image(&mut self, rect: Rect, path: &Path) -> Result<()>;

    /// Lay text into a box. May fail when the text cannot be placed
    /// (overflow, missing glyphs); the exporter skips the item.
    fn draw_text_box(
        &mut self,
        rect: Rect,
        text: &str,
        font_size: f64,
        color: Color,
        align: Align,
    ) -> Result<()>;

    /// Draw free-standing rotated text on top of everything drawn so far.
    fn overlay_text(
        &mut self,
        position: (f64, f64),
        text: &str,
        font_size: f64,
        rotation: f64,
        color: Color,
    ) -> Result<()>;

    /// Serialize the document to bytes, consuming the canvas.
    fn finish(self, quality: Quality) -> Result<Vec<u8>>;
}
