//! Import options and configuration.

/// Options for importing a PDF into a scene-graph document.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Oversampling factor for the page background raster. Values below 2.0
    /// are raised to 2.0 at import time to keep the fallback raster sharp.
    pub raster_scale: f64,

    /// Maximum placements emitted per distinct image object, bounding
    /// pathological documents.
    pub placement_cap: usize,

    /// Minimal mapped width/height, in canonical points, for an image
    /// placement to survive import. Smaller placements are decorative noise.
    pub min_item_size: f64,

    /// Generator mode tag recorded on the document.
    pub mode: String,

    /// Generator preset tag recorded on the document.
    pub preset: String,

    /// Owner (tenant id) recorded on every created asset.
    pub owner: String,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raster oversampling factor.
    pub fn with_raster_scale(mut self, scale: f64) -> Self {
        self.raster_scale = scale;
        self
    }

    /// Set the per-object placement cap.
    pub fn with_placement_cap(mut self, cap: usize) -> Self {
        self.placement_cap = cap;
        self
    }

    /// Set the minimal visible placement size.
    pub fn with_min_item_size(mut self, size: f64) -> Self {
        self.min_item_size = size;
        self
    }

    /// Set the generator mode tag.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the generator preset tag.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = preset.into();
        self
    }

    /// Set the tenant recorded as asset owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            raster_scale: 2.0,
            placement_cap: 4,
            min_item_size: 10.0,
            mode: "safe".to_string(),
            preset: "smart".to_string(),
            owner: "local".to_string(),
        }
    }
}
