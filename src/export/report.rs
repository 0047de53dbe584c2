//! Export degradation report.

use serde::Serialize;

/// Why an item (or layer) was not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The layer carries `visible = false`.
    HiddenLayer,
    /// The asset id did not resolve to an existing local file.
    MissingAsset(String),
    /// The codec failed to place a resolved image.
    ImagePlacement(String),
    /// The text frame collected to an empty string.
    EmptyText,
    /// The codec could not lay the text into its box.
    TextPlacement(String),
    /// A rectangle or line primitive failed at the codec.
    Primitive(String),
}

/// One skipped item or layer.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSkip {
    /// Zero-based page index.
    pub page: usize,

    /// Item id, or layer id for [`SkipReason::HiddenLayer`].
    pub id: String,

    pub reason: SkipReason,
}

/// Summary of one export run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// Pages rendered.
    pub pages: usize,

    /// Skipped items/layers, in encounter order.
    pub skips: Vec<ExportSkip>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, page: usize, id: impl Into<String>, reason: SkipReason) {
        self.skips.push(ExportSkip {
            page,
            id: id.into(),
            reason,
        });
    }

    /// True when every item rendered.
    pub fn is_clean(&self) -> bool {
        self.skips.is_empty()
    }

    /// Skips recorded for one page.
    pub fn skips_for_page(&self, page: usize) -> impl Iterator<Item = &ExportSkip> {
        self.skips.iter().filter(move |s| s.page == page)
    }
}
