//! Geometry and color primitives shared by every scene-graph item.

use serde::{Deserialize, Serialize};

/// Canonical A4 page width in points (the target space of every import).
pub const A4_WIDTH_PT: f64 = 595.2756;

/// Canonical A4 page height in points.
pub const A4_HEIGHT_PT: f64 = 841.8898;

/// Millimeters to points (72 dpi).
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// An axis-aligned rectangle in page points, origin top-left.
///
/// Width and height are kept non-negative; constructors clamp. The same
/// shape doubles as a normalized crop box (0..1 fractions) on image frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Create a rectangle, clamping negative extents to zero.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// The unit rectangle (0,0)-(1,1), the default "no crop" crop box.
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Return a copy with any negative extents clamped to zero.
    ///
    /// Deserialized documents bypass [`Rect::new`], so renderers normalize
    /// before drawing.
    pub fn normalized(self) -> Self {
        Self::new(self.x, self.y, self.w, self.h)
    }

    /// Translate by (dx, dy).
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Bottom-right corner.
    pub fn corner(&self) -> (f64, f64) {
        (self.x + self.w, self.y + self.h)
    }

    /// True when either extent is zero.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// An RGB color stored as exactly three components.
///
/// The wire format accepts components in either 0..1 or 0..255;
/// [`Color::to_unit`] normalizes for drawing, matching the tolerant color
/// handling of the downstream editors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f32; 3]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0]);

    /// Create a color from unit-range components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color([r, g, b])
    }

    /// Normalize to unit range: components above 1.0 are treated as 0..255,
    /// everything is clamped to [0, 1], NaN collapses to 0.
    pub fn to_unit(self) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (slot, &v) in out.iter_mut().zip(self.0.iter()) {
            let v = if v.is_finite() { v } else { 0.0 };
            let v = if v > 1.0 { v / 255.0 } else { v };
            *slot = v.clamp(0.0, 1.0);
        }
        out
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
