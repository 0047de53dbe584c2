//! Error types for scenepdf.
//!
//! Only *fatal* conditions surface as [`Error`]: an unreadable source on
//! import, an empty page list on export, a broken output canvas. Everything
//! the pipelines can survive (a failed extraction step, an unresolvable
//! asset, a text box the codec cannot place) is not an error at all — it is
//! recorded as a skip in the import/export reports.

use std::io;
use thiserror::Error;

/// Result type alias for scenepdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort an import or export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not recognized as a PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The codec engine could not open or decode the source document.
    #[error("PDF decode error: {0}")]
    Decode(String),

    /// Export was asked to render a document with no pages.
    #[error("Document has no pages to export")]
    EmptyDocument,

    /// The output canvas failed while a page was being assembled.
    #[error("PDF compose error: {0}")]
    Compose(String),

    /// The blob store rejected an operation that cannot be skipped.
    #[error("Asset store error: {0}")]
    AssetStore(String),

    /// Error serializing or deserializing a scene-graph document.
    #[error("Document serialization error: {0}")]
    Serialization(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
