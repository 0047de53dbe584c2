//! PDF import: decode a source PDF into an editable scene-graph document.
//!
//! Safety-first strategy: every page gets a full-bleed background raster
//! first, so the import stays visually faithful even when structured
//! extraction recovers nothing. Text blocks and embedded images are then
//! lifted onto an editable overlay layer, best effort.

use std::collections::HashSet;
use std::io::Cursor;

use crate::assets::{AssetIngestor, AssetStore};
use crate::codec::{PdfEngine, SourcePdf};
use crate::detect;
use crate::error::Result;
use crate::model::{
    Align, Document, FitMode, GeneratorInfo, Item, ItemKind, Layer, Page, Rect, TextRun,
    A4_HEIGHT_PT, A4_WIDTH_PT,
};

use super::mapper::PageMap;
use super::options::ImportOptions;
use super::report::{ImportReport, ImportStage};

/// Version tag recorded on every imported document.
const GENERATOR_VERSION: &str = "import-v2";

/// Ink channel count from which a source image is treated as CMYK-or-richer
/// and re-encoded to RGB before ingestion.
const RGB_CONVERT_THRESHOLD: u8 = 5;

/// Result of one import run.
#[derive(Debug)]
pub struct ImportOutcome {
    /// The imported document. Owned by the caller; the importer keeps no
    /// reference.
    pub document: Document,

    /// Asset ids created during the run, in creation order.
    pub created_assets: Vec<String>,

    /// Degraded-feature records for the run.
    pub report: ImportReport,
}

/// Imports PDFs into scene-graph documents.
///
/// Stateless apart from its options; each [`import`](PdfImporter::import)
/// call is independent and reentrant. The image dedup cache lives inside
/// the call, never across calls.
pub struct PdfImporter {
    options: ImportOptions,
}

impl PdfImporter {
    pub fn new() -> Self {
        Self::with_options(ImportOptions::default())
    }

    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import a source PDF.
    ///
    /// Fatal only when the bytes are not a PDF or the codec cannot open
    /// them; per-page extraction failures degrade that one feature and are
    /// recorded in the outcome's report.
    pub fn import<E, S>(&self, engine: &E, store: &S, data: &[u8]) -> Result<ImportOutcome>
    where
        E: PdfEngine,
        S: AssetStore,
    {
        detect::ensure_pdf(data)?;
        let source = engine.open(data)?;

        let mut ingestor = AssetIngestor::new(store, &self.options.owner);
        let mut report = ImportReport::new();
        let mut document = Document::with_defaults(GeneratorInfo::new(
            GENERATOR_VERSION,
            &self.options.mode,
            &self.options.preset,
        ));

        for index in 0..source.page_count() {
            let page = self.import_page(&source, &mut ingestor, &mut report, index);
            document.add_page(page);
        }

        report.pages = document.page_count();
        Ok(ImportOutcome {
            document,
            created_assets: ingestor.into_created(),
            report,
        })
    }

    /// Build one page. Never fails: each extraction step degrades on its
    /// own and the raster fallback covers the rest.
    fn import_page<P, S>(
        &self,
        source: &P,
        ingestor: &mut AssetIngestor<'_, S>,
        report: &mut ImportReport,
        index: usize,
    ) -> Page
    where
        P: SourcePdf,
        S: AssetStore,
    {
        let map = match source.page_size(index) {
            Ok((w, h)) => PageMap::to_canonical(w, h),
            Err(e) => {
                log::warn!("page {}: unreadable geometry, assuming A4: {}", index + 1, e);
                report.record(index, ImportStage::Geometry, e.to_string());
                PageMap::to_canonical(A4_WIDTH_PT, A4_HEIGHT_PT)
            }
        };

        let mut background = Layer::locked("bg", "PDF Background");
        self.import_raster(source, ingestor, report, index, &mut background);

        let mut overlay = Layer::new("overlay", "Detected");
        self.import_text(source, report, index, &map, &mut overlay);
        self.import_images(source, ingestor, report, index, &map, &mut overlay);

        let mut page = Page::new(format!("p-{index}"), "Imported");
        page.add_layer(background);
        page.add_layer(overlay);
        page
    }

    /// Step 1: full-page raster, ingested and pinned full-bleed on the
    /// locked background layer.
    fn import_raster<P, S>(
        &self,
        source: &P,
        ingestor: &mut AssetIngestor<'_, S>,
        report: &mut ImportReport,
        index: usize,
        background: &mut Layer,
    ) where
        P: SourcePdf,
        S: AssetStore,
    {
        let scale = self.options.raster_scale.max(2.0);
        let png = match source.rasterize(index, scale) {
            Ok(png) => png,
            Err(e) => {
                log::warn!("page {}: rasterization failed: {}", index + 1, e);
                report.record(index, ImportStage::Raster, e.to_string());
                return;
            }
        };

        let filename = format!("import_bg_p{}.png", index + 1);
        match ingestor.ingest(&png, &filename) {
            Ok(asset_id) => background.add_item(Item::new(
                format!("bg-{index}"),
                Rect::new(0.0, 0.0, A4_WIDTH_PT, A4_HEIGHT_PT),
                ItemKind::ImageFrame {
                    asset_ref: asset_id,
                    fit_mode: FitMode::Cover,
                    crop: Rect::unit(),
                    locked: true,
                    role: Some("pdf_background".to_string()),
                },
            )),
            Err(e) => {
                log::warn!("page {}: background raster not persisted: {}", index + 1, e);
                report.record(index, ImportStage::AssetPersist, e.to_string());
            }
        }
    }

    /// Step 2: text blocks to editable TextFrames on the overlay.
    fn import_text<P>(
        &self,
        source: &P,
        report: &mut ImportReport,
        index: usize,
        map: &PageMap,
        overlay: &mut Layer,
    ) where
        P: SourcePdf,
    {
        let blocks = match source.text_blocks(index) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("page {}: text extraction failed: {}", index + 1, e);
                report.record(index, ImportStage::Text, e.to_string());
                return;
            }
        };

        for block in blocks {
            let text = block.collected_text();
            if text.is_empty() {
                continue;
            }
            let rect = map.map(block.bbox);
            overlay.add_item(Item::new(
                format!("tx-{index}-{}", overlay.items.len()),
                rect,
                ItemKind::TextFrame {
                    rich_text_runs: Some(vec![TextRun::plain(text)]),
                    text: None,
                    style_ref: Some("Body".to_string()),
                    font_size: None,
                    color: None,
                    align: Align::Left,
                    padding: 6.0,
                },
            ));
        }
    }

    /// Step 3: embedded images, deduplicated by object identity, with
    /// placements capped and sub-threshold placements discarded.
    fn import_images<P, S>(
        &self,
        source: &P,
        ingestor: &mut AssetIngestor<'_, S>,
        report: &mut ImportReport,
        index: usize,
        map: &PageMap,
        overlay: &mut Layer,
    ) where
        P: SourcePdf,
        S: AssetStore,
    {
        let objects = match source.image_objects(index) {
            Ok(objects) => objects,
            Err(e) => {
                log::warn!("page {}: image extraction failed: {}", index + 1, e);
                report.record(index, ImportStage::Images, e.to_string());
                return;
            }
        };

        let mut seen_on_page: HashSet<u64> = HashSet::new();
        for object in objects {
            if !seen_on_page.insert(object.object_id) {
                continue;
            }
            if object.placements.is_empty() || object.data.is_empty() {
                continue;
            }

            let bytes = if object.ink_channels >= RGB_CONVERT_THRESHOLD {
                match reencode_rgb_png(&object.data) {
                    Ok(converted) => converted,
                    Err(e) => {
                        log::debug!(
                            "page {}: RGB conversion of object {} failed, keeping source bytes: {}",
                            index + 1,
                            object.object_id,
                            e
                        );
                        report.record(index, ImportStage::ColorConvert, e.to_string());
                        object.data.clone()
                    }
                }
            } else {
                object.data.clone()
            };

            let filename = format!("import_img_{}_{}.png", index + 1, object.object_id);
            let asset_id = match ingestor.ingest_object(object.object_id, &bytes, &filename) {
                Ok(id) => id,
                Err(e) => {
                    log::warn!(
                        "page {}: image object {} not persisted: {}",
                        index + 1,
                        object.object_id,
                        e
                    );
                    report.record(index, ImportStage::AssetPersist, e.to_string());
                    continue;
                }
            };

            for placement in object.placements.iter().take(self.options.placement_cap) {
                let rect = map.map(*placement);
                if rect.w < self.options.min_item_size || rect.h < self.options.min_item_size {
                    continue;
                }
                overlay.add_item(Item::new(
                    format!("im-{index}-{}-{}", object.object_id, overlay.items.len()),
                    rect,
                    ItemKind::ImageFrame {
                        asset_ref: asset_id.clone(),
                        fit_mode: FitMode::Cover,
                        crop: Rect::unit(),
                        locked: false,
                        role: Some("imported_image".to_string()),
                    },
                ));
            }
        }
    }
}

impl Default for PdfImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort re-encode of arbitrary encoded image bytes to an RGB PNG.
fn reencode_rgb_png(data: &[u8]) -> std::result::Result<Vec<u8>, image::ImageError> {
    let decoded = image::load_from_memory(data)?;
    let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());
    let mut out = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
    Ok(out)
}
