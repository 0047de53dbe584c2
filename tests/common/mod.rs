//! Shared fakes for integration tests: an in-memory codec engine, a
//! scripted drawing canvas, and an in-memory asset store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use scenepdf::codec::{ImageObject, PdfCanvas, PdfEngine, Quality, SourcePdf, TextBlock};
use scenepdf::{Align, AssetStore, Color, Error, Rect, Result};

/// One fake source page.
#[derive(Clone, Default)]
pub struct FakePage {
    pub width: f64,
    pub height: f64,
    pub raster: Vec<u8>,
    pub text_blocks: Vec<TextBlock>,
    pub images: Vec<ImageObject>,
    pub fail_raster: bool,
    pub fail_text: bool,
    pub fail_images: bool,
}

impl FakePage {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            raster: b"raster-png".to_vec(),
            ..Default::default()
        }
    }

    /// A page already in canonical A4 size, so mapping is the identity.
    pub fn a4() -> Self {
        Self::sized(595.2756, 841.8898)
    }
}

/// Fake codec engine: serves a fixed page list for any input it accepts.
pub struct FakeEngine {
    pub pages: Vec<FakePage>,
    pub fail_open: bool,
}

impl FakeEngine {
    pub fn with_pages(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            fail_open: false,
        }
    }
}

pub struct FakeSource {
    pages: Vec<FakePage>,
}

impl PdfEngine for FakeEngine {
    type Source = FakeSource;

    fn open(&self, _data: &[u8]) -> Result<FakeSource> {
        if self.fail_open {
            return Err(Error::Decode("xref table damaged".into()));
        }
        Ok(FakeSource {
            pages: self.pages.clone(),
        })
    }
}

impl FakeSource {
    fn page(&self, index: usize) -> Result<&FakePage> {
        self.pages
            .get(index)
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}

impl SourcePdf for FakeSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, index: usize) -> Result<(f64, f64)> {
        let page = self.page(index)?;
        Ok((page.width, page.height))
    }

    fn rasterize(&self, index: usize, _scale: f64) -> Result<Vec<u8>> {
        let page = self.page(index)?;
        if page.fail_raster {
            return Err(Error::Decode("render failed".into()));
        }
        Ok(page.raster.clone())
    }

    fn text_blocks(&self, index: usize) -> Result<Vec<TextBlock>> {
        let page = self.page(index)?;
        if page.fail_text {
            return Err(Error::Decode("text engine crashed".into()));
        }
        Ok(page.text_blocks.clone())
    }

    fn image_objects(&self, index: usize) -> Result<Vec<ImageObject>> {
        let page = self.page(index)?;
        if page.fail_images {
            return Err(Error::Decode("image list unavailable".into()));
        }
        Ok(page.images.clone())
    }
}

/// In-memory blob store; resolve() always misses (imports never resolve).
#[derive(Default)]
pub struct MemStore {
    pub blobs: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_puts: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blob(&self, id: &str) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(id).cloned()
    }
}

impl AssetStore for MemStore {
    fn put(&self, data: &[u8], filename: &str, _owner: &str) -> Result<String> {
        if self.fail_puts {
            return Err(Error::AssetStore("store offline".into()));
        }
        let mut blobs = self.blobs.lock().unwrap();
        let id = format!("asset-{}-{}", blobs.len(), filename);
        blobs.insert(id.clone(), data.to_vec());
        Ok(id)
    }

    fn resolve(&self, _asset_id: &str) -> Option<PathBuf> {
        None
    }
}

fn fmt_color(c: Color) -> String {
    let [r, g, b] = c.0;
    format!("({r:.3},{g:.3},{b:.3})")
}

fn fmt_rect(r: Rect) -> String {
    format!("[{:.3},{:.3},{:.3},{:.3}]", r.x, r.y, r.w, r.h)
}

/// Canvas that records every primitive as one text line; `finish` yields the
/// script as bytes. Deterministic, so byte-equality checks work.
#[derive(Default)]
pub struct ScriptCanvas {
    pub ops: Vec<String>,
    pub fail_text_boxes: bool,
    pub fail_images: bool,
}

impl ScriptCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PdfCanvas for ScriptCanvas {
    fn new_page(&mut self, width: f64, height: f64) -> Result<()> {
        self.ops.push(format!("page {width:.4}x{height:.4}"));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.ops
            .push(format!("fill {} {}", fmt_rect(rect), fmt_color(color)));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) -> Result<()> {
        self.ops.push(format!(
            "stroke {} {} w={width}",
            fmt_rect(rect),
            fmt_color(color)
        ));
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        width: f64,
    ) -> Result<()> {
        self.ops.push(format!(
            "line ({:.3},{:.3})->({:.3},{:.3}) {} w={width}",
            from.0,
            from.1,
            to.0,
            to.1,
            fmt_color(color)
        ));
        Ok(())
    }

    fn place_image(&mut self, rect: Rect, path: &std::path::Path) -> Result<()> {
        if self.fail_images {
            return Err(Error::Compose("bad image data".into()));
        }
        self.ops
            .push(format!("image {} {}", fmt_rect(rect), path.display()));
        Ok(())
    }

    fn draw_text_box(
        &mut self,
        rect: Rect,
        text: &str,
        font_size: f64,
        color: Color,
        align: Align,
    ) -> Result<()> {
        if self.fail_text_boxes {
            return Err(Error::Compose("text overflow".into()));
        }
        self.ops.push(format!(
            "text {} {:?} size={font_size} {} align={align:?}",
            fmt_rect(rect),
            text,
            fmt_color(color)
        ));
        Ok(())
    }

    fn overlay_text(
        &mut self,
        position: (f64, f64),
        text: &str,
        font_size: f64,
        rotation: f64,
        color: Color,
    ) -> Result<()> {
        self.ops.push(format!(
            "overlay ({:.3},{:.3}) {:?} size={font_size} rot={rotation} {}",
            position.0,
            position.1,
            text,
            fmt_color(color)
        ));
        Ok(())
    }

    fn finish(mut self, quality: Quality) -> Result<Vec<u8>> {
        self.ops.push(format!("finish {quality:?}"));
        Ok(self.ops.join("\n").into_bytes())
    }
}

/// A minimal but valid-looking PDF header payload for the importer gate.
pub fn pdf_stub() -> Vec<u8> {
    let mut data = b"%PDF-1.7\n".to_vec();
    data.resize(64, b' ');
    data
}
