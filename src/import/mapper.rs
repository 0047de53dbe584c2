//! Coordinate mapping from a source page space into canonical page space.

use crate::model::{Rect, A4_HEIGHT_PT, A4_WIDTH_PT};

/// Affine mapping between an arbitrary source page size and a target page
/// size: a pure anisotropic scale per axis, no rotation or skew.
///
/// A zero source dimension is treated as 1.0, so the mapping has no failure
/// modes.
#[derive(Debug, Clone, Copy)]
pub struct PageMap {
    scale_x: f64,
    scale_y: f64,
}

impl PageMap {
    /// Mapping into an explicit target size.
    pub fn new(source_w: f64, source_h: f64, target_w: f64, target_h: f64) -> Self {
        let source_w = if source_w == 0.0 { 1.0 } else { source_w };
        let source_h = if source_h == 0.0 { 1.0 } else { source_h };
        Self {
            scale_x: target_w / source_w,
            scale_y: target_h / source_h,
        }
    }

    /// Mapping into the canonical A4 target space.
    pub fn to_canonical(source_w: f64, source_h: f64) -> Self {
        Self::new(source_w, source_h, A4_WIDTH_PT, A4_HEIGHT_PT)
    }

    /// Map a source rectangle into the target space. Each coordinate and
    /// extent is multiplied by the matching axis scale.
    pub fn map(&self, r: Rect) -> Rect {
        Rect::new(
            r.x * self.scale_x,
            r.y * self.scale_y,
            r.w * self.scale_x,
            r.h * self.scale_y,
        )
    }

    pub fn scales(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }
}
