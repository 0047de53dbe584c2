//! Export options and configuration.

use crate::codec::Quality;

/// Options for rendering a scene-graph document into a PDF.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output byte-size tier, forwarded to the canvas at serialization.
    pub quality: Quality,

    /// Bleed added on all four sides, in millimeters.
    pub bleed_mm: f64,

    /// Draw trim marks at the bleed boundary. Only effective with a
    /// non-zero bleed.
    pub crop_marks: bool,

    /// Overlay a large rotated "PREVIEW" label on every page.
    pub watermark: bool,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_bleed_mm(mut self, bleed_mm: f64) -> Self {
        self.bleed_mm = bleed_mm;
        self
    }

    pub fn with_crop_marks(mut self, crop_marks: bool) -> Self {
        self.crop_marks = crop_marks;
        self
    }

    pub fn with_watermark(mut self, watermark: bool) -> Self {
        self.watermark = watermark;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            quality: Quality::Web,
            bleed_mm: 3.0,
            crop_marks: false,
            watermark: false,
        }
    }
}
