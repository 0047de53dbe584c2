//! # scenepdf
//!
//! Bidirectional conversion between print PDFs and editable scene-graph
//! documents.
//!
//! A scene-graph [`Document`] is a tree of pages, layers and positioned
//! items (text frames, image frames, shapes, lines) in a canonical page
//! space. This crate covers both directions of the translation:
//!
//! - **Import** decodes an arbitrary PDF into a `Document`, pinning a
//!   full-page raster behind every page for visual fidelity and lifting
//!   text blocks and embedded images onto an editable overlay, best effort.
//! - **Export** renders a `Document` back into a print-ready PDF with
//!   bleed, crop marks and an optional preview watermark.
//!
//! The two pipelines never touch each other's output directly; the model is
//! the contract between them. The low-level PDF codec (rasterization,
//! glyph-level extraction, drawing primitives) and the blob store for image
//! assets are external collaborators behind the [`codec`] and [`assets`]
//! traits.
//!
//! ## Quick start
//!
//! ```no_run
//! use scenepdf::{FsAssetStore, ImportOptions, PdfImporter};
//!
//! fn run(engine: &impl scenepdf::PdfEngine) -> scenepdf::Result<()> {
//!     let store = FsAssetStore::open("./assets")?;
//!     let pdf_bytes = std::fs::read("issue-12.pdf")?;
//!
//!     let importer = PdfImporter::with_options(ImportOptions::new().with_owner("club-1"));
//!     let outcome = importer.import(engine, &store, &pdf_bytes)?;
//!
//!     println!(
//!         "{} pages, {} assets, {} degraded features",
//!         outcome.document.page_count(),
//!         outcome.created_assets.len(),
//!         outcome.report.skips.len()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Degradation policy
//!
//! A successful import always yields a usable, visually faithful document
//! even if zero text or images were recovered; a successful export always
//! yields a valid PDF even if individual items were unrenderable. Whatever
//! was skipped is reported explicitly — see [`ImportReport`] and
//! [`ExportReport`].

pub mod assets;
pub mod codec;
pub mod detect;
pub mod error;
pub mod export;
pub mod import;
pub mod model;

// Re-export commonly used types
pub use assets::{AssetIngestor, AssetResolver, AssetStore, FnResolver, FsAssetStore};
pub use codec::{ImageObject, PdfCanvas, PdfEngine, Quality, SourcePdf, TextBlock};
pub use error::{Error, Result};
pub use export::{ExportOptions, ExportOutcome, ExportReport, ExportSkip, PdfExporter, SkipReason};
pub use import::{
    ImportOptions, ImportOutcome, ImportReport, ImportSkip, ImportStage, PageMap, PdfImporter,
};
pub use model::{
    Align, Color, Document, DocumentSettings, FitMode, GeneratorInfo, Item, ItemKind, Layer, Page,
    PageBackground, Rect, StyleTable, TextContent, TextRun, TextStyle, A4_HEIGHT_PT, A4_WIDTH_PT,
    MM_TO_PT,
};

/// Import a PDF with default options.
///
/// Convenience wrapper over [`PdfImporter`].
pub fn import_pdf<E, S>(engine: &E, store: &S, data: &[u8]) -> Result<ImportOutcome>
where
    E: PdfEngine,
    S: AssetStore,
{
    PdfImporter::new().import(engine, store, data)
}

/// Import a PDF with custom options.
pub fn import_pdf_with_options<E, S>(
    engine: &E,
    store: &S,
    data: &[u8],
    options: ImportOptions,
) -> Result<ImportOutcome>
where
    E: PdfEngine,
    S: AssetStore,
{
    PdfImporter::with_options(options).import(engine, store, data)
}

/// Export a document with default options.
///
/// Convenience wrapper over [`PdfExporter`].
pub fn export_pdf<C, R>(document: &Document, canvas: C, resolver: &R) -> Result<ExportOutcome>
where
    C: PdfCanvas,
    R: AssetResolver,
{
    PdfExporter::new().export(document, canvas, resolver)
}

/// Export a document with custom options.
pub fn export_pdf_with_options<C, R>(
    document: &Document,
    canvas: C,
    resolver: &R,
    options: ExportOptions,
) -> Result<ExportOutcome>
where
    C: PdfCanvas,
    R: AssetResolver,
{
    PdfExporter::with_options(options).export(document, canvas, resolver)
}

/// JSON output format for the document wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document to its editor-facing JSON shape.
///
/// ```
/// use scenepdf::{document_to_json, Document, GeneratorInfo, JsonFormat};
///
/// let doc = Document::with_defaults(GeneratorInfo::new("import-v2", "safe", "smart"));
/// let json = document_to_json(&doc, JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"format\":\"A4\""));
/// ```
pub fn document_to_json(document: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(document),
        JsonFormat::Compact => serde_json::to_string(document),
    };
    result.map_err(Error::from)
}

/// Deserialize a document from its editor-facing JSON shape.
pub fn document_from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json).map_err(Error::from)
}
