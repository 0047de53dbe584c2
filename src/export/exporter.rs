//! PDF export: render a scene-graph document through a codec canvas.
//!
//! Strict painter's algorithm: pages, layers, items in document order, later
//! paint over earlier. Deterministic by construction — the exporter
//! introduces no timestamps and no randomness, so the same document with the
//! same inputs serializes byte-identically.

use crate::assets::AssetResolver;
use crate::codec::PdfCanvas;
use crate::error::{Error, Result};
use crate::model::{Color, Document, Item, ItemKind, Rect, MM_TO_PT};

use super::options::ExportOptions;
use super::report::{ExportReport, SkipReason};

/// Nominal page size, in points, when the document settings carry none.
const DEFAULT_PAGE_WIDTH: f64 = 595.0;
const DEFAULT_PAGE_HEIGHT: f64 = 842.0;

/// Crop mark geometry at the bleed boundary.
const CROP_MARK_LEN: f64 = 12.0;
const CROP_MARK_WIDTH: f64 = 0.5;

/// Watermark label drawn over preview exports.
const WATERMARK_TEXT: &str = "PREVIEW";
const WATERMARK_FONT_SIZE: f64 = 80.0;
const WATERMARK_ROTATION: f64 = 25.0;
const WATERMARK_GREY: Color = Color([0.7, 0.7, 0.7]);

/// Result of one export run.
#[derive(Debug)]
pub struct ExportOutcome {
    /// The serialized PDF.
    pub bytes: Vec<u8>,

    /// Skipped items/layers, for callers that surface partial renders.
    pub report: ExportReport,
}

/// Renders scene-graph documents into PDFs.
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render `document` onto `canvas`, resolving image assets through
    /// `resolver`.
    ///
    /// The only fatal conditions are an empty page list, a canvas that
    /// cannot start a page, and serialization failure; every per-item
    /// problem is skipped and recorded.
    pub fn export<C, R>(
        &self,
        document: &Document,
        mut canvas: C,
        resolver: &R,
    ) -> Result<ExportOutcome>
    where
        C: PdfCanvas,
        R: AssetResolver,
    {
        if document.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let base_w = document.settings.page_width.unwrap_or(DEFAULT_PAGE_WIDTH);
        let base_h = document.settings.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT);
        let bleed_pt = self.options.bleed_mm.max(0.0) * MM_TO_PT;
        let page_w = base_w + 2.0 * bleed_pt;
        let page_h = base_h + 2.0 * bleed_pt;

        let mut report = ExportReport::new();

        for (page_index, page) in document.pages.iter().enumerate() {
            canvas.new_page(page_w, page_h)?;

            if let Some(fill) = page.background.as_ref().and_then(|bg| bg.fill) {
                let full = Rect::new(0.0, 0.0, page_w, page_h);
                if let Err(e) = canvas.fill_rect(full, unit(fill)) {
                    report.record(page_index, &page.id, SkipReason::Primitive(e.to_string()));
                }
            }

            for layer in &page.layers {
                if !layer.visible {
                    log::debug!("page {}: skipping hidden layer {}", page_index + 1, layer.id);
                    report.record(page_index, &layer.id, SkipReason::HiddenLayer);
                    continue;
                }
                // `locked` is an editing flag; locked layers render normally.
                for item in &layer.items {
                    self.draw_item(&mut canvas, resolver, &mut report, page_index, bleed_pt, item);
                }
            }

            if self.options.crop_marks && bleed_pt > 0.0 {
                self.draw_crop_marks(&mut canvas, &mut report, page_index, page_w, page_h, bleed_pt);
            }

            if self.options.watermark {
                let position = (page_w * 0.15, page_h * 0.5);
                if let Err(e) = canvas.overlay_text(
                    position,
                    WATERMARK_TEXT,
                    WATERMARK_FONT_SIZE,
                    WATERMARK_ROTATION,
                    WATERMARK_GREY,
                ) {
                    report.record(page_index, &page.id, SkipReason::Primitive(e.to_string()));
                }
            }
        }

        report.pages = document.page_count();
        let bytes = canvas.finish(self.options.quality)?;
        Ok(ExportOutcome { bytes, report })
    }

    fn draw_item<C, R>(
        &self,
        canvas: &mut C,
        resolver: &R,
        report: &mut ExportReport,
        page_index: usize,
        bleed_pt: f64,
        item: &Item,
    ) where
        C: PdfCanvas,
        R: AssetResolver,
    {
        let rect = item.rect.normalized().offset(bleed_pt, bleed_pt);

        match &item.kind {
            ItemKind::Shape {
                fill,
                stroke,
                stroke_width,
            } => {
                // Absent channels are simply not painted.
                if let Some(fill) = fill {
                    if let Err(e) = canvas.fill_rect(rect, unit(*fill)) {
                        report.record(page_index, &item.id, SkipReason::Primitive(e.to_string()));
                    }
                }
                if let Some(stroke) = stroke {
                    if let Err(e) = canvas.stroke_rect(rect, unit(*stroke), *stroke_width) {
                        report.record(page_index, &item.id, SkipReason::Primitive(e.to_string()));
                    }
                }
            }

            ItemKind::Line {
                stroke,
                stroke_width,
                x2,
                y2,
            } => {
                let from = (rect.x, rect.y);
                let (cx, cy) = rect.corner();
                let to = (
                    x2.map(|v| v + bleed_pt).unwrap_or(cx),
                    y2.map(|v| v + bleed_pt).unwrap_or(cy),
                );
                let color = stroke.unwrap_or(Color::BLACK);
                if let Err(e) = canvas.draw_line(from, to, unit(color), *stroke_width) {
                    report.record(page_index, &item.id, SkipReason::Primitive(e.to_string()));
                }
            }

            ItemKind::ImageFrame { asset_ref, .. } => {
                // fitMode/crop are editor hints; the image is stretched to
                // exactly fill its rectangle.
                match resolver.resolve_path(asset_ref) {
                    Some(path) if path.is_file() => {
                        if let Err(e) = canvas.place_image(rect, &path) {
                            log::warn!(
                                "page {}: image {} unrenderable: {}",
                                page_index + 1,
                                item.id,
                                e
                            );
                            report.record(
                                page_index,
                                &item.id,
                                SkipReason::ImagePlacement(e.to_string()),
                            );
                        }
                    }
                    _ => {
                        report.record(
                            page_index,
                            &item.id,
                            SkipReason::MissingAsset(asset_ref.clone()),
                        );
                    }
                }
            }

            ItemKind::TextFrame {
                font_size,
                color,
                align,
                ..
            } => {
                let text = item.plain_text();
                if text.is_empty() {
                    report.record(page_index, &item.id, SkipReason::EmptyText);
                    return;
                }
                let size = font_size.unwrap_or(12.0);
                let color = color.unwrap_or(Color::BLACK);
                if let Err(e) = canvas.draw_text_box(rect, &text, size, unit(color), *align) {
                    report.record(
                        page_index,
                        &item.id,
                        SkipReason::TextPlacement(e.to_string()),
                    );
                }
            }
        }
    }

    /// Eight short marks, two per corner, at the bleed boundary.
    fn draw_crop_marks<C>(
        &self,
        canvas: &mut C,
        report: &mut ExportReport,
        page_index: usize,
        page_w: f64,
        page_h: f64,
        bleed_pt: f64,
    ) where
        C: PdfCanvas,
    {
        let m = bleed_pt;
        let len = CROP_MARK_LEN;
        let marks: [((f64, f64), (f64, f64)); 8] = [
            // top-left
            ((m, 0.0), (m, len)),
            ((0.0, m), (len, m)),
            // top-right
            ((page_w - m, 0.0), (page_w - m, len)),
            ((page_w - len, m), (page_w, m)),
            // bottom-left
            ((m, page_h - len), (m, page_h)),
            ((0.0, page_h - m), (len, page_h - m)),
            // bottom-right
            ((page_w - m, page_h - len), (page_w - m, page_h)),
            ((page_w - len, page_h - m), (page_w, page_h - m)),
        ];

        for (from, to) in marks {
            if let Err(e) = canvas.draw_line(from, to, Color::BLACK, CROP_MARK_WIDTH) {
                report.record(page_index, "crop-marks", SkipReason::Primitive(e.to_string()));
            }
        }
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a wire color before it reaches the codec.
fn unit(color: Color) -> Color {
    Color(color.to_unit())
}
