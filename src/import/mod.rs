//! PDF import pipeline.

mod importer;
mod mapper;
mod options;
mod report;

pub use importer::{ImportOutcome, PdfImporter};
pub use mapper::PageMap;
pub use options::ImportOptions;
pub use report::{ImportReport, ImportSkip, ImportStage};
