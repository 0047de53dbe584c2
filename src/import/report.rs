//! Import degradation report.
//!
//! Graceful degradation is control flow here, not swallowed exceptions:
//! every feature the importer skips ends up as an [`ImportSkip`] record, so
//! callers and tests can assert on skip reasons instead of only on the
//! shape of the output document.

use serde::Serialize;

/// The import stage a skip happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStage {
    /// Reading the source page geometry.
    Geometry,
    /// Page background rasterization.
    Raster,
    /// Text block extraction.
    Text,
    /// Embedded image extraction.
    Images,
    /// CMYK-and-beyond to RGB re-encode.
    ColorConvert,
    /// Persisting bytes through the asset store.
    AssetPersist,
}

/// One degraded feature: the page it happened on, the stage, and why.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSkip {
    /// Zero-based source page index.
    pub page: usize,
    pub stage: ImportStage,
    pub reason: String,
}

/// Summary of one import run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Pages produced (always equals the source page count).
    pub pages: usize,

    /// Degraded features, in the order they were hit.
    pub skips: Vec<ImportSkip>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, page: usize, stage: ImportStage, reason: impl Into<String>) {
        self.skips.push(ImportSkip {
            page,
            stage,
            reason: reason.into(),
        });
    }

    /// True when nothing was degraded.
    pub fn is_clean(&self) -> bool {
        self.skips.is_empty()
    }

    /// Skips recorded for one page.
    pub fn skips_for_page(&self, page: usize) -> impl Iterator<Item = &ImportSkip> {
        self.skips.iter().filter(move |s| s.page == page)
    }

    /// Skips recorded for one stage.
    pub fn skips_for_stage(&self, stage: ImportStage) -> impl Iterator<Item = &ImportSkip> {
        self.skips.iter().filter(move |s| s.stage == stage)
    }
}
