//! PDF export pipeline.

mod exporter;
mod options;
mod report;

pub use exporter::{ExportOutcome, PdfExporter};
pub use options::ExportOptions;
pub use report::{ExportReport, ExportSkip, SkipReason};
