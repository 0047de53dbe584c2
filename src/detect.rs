//! Cheap PDF sniffing before the codec engine is invoked.
//!
//! The importer never hands bytes to the codec collaborator without first
//! checking the magic header; a garbage upload should fail with
//! [`Error::UnknownFormat`](crate::Error::UnknownFormat) instead of a
//! codec-specific decode error.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Smallest byte count the importer will even look at. Anything shorter
/// cannot hold a header plus a cross-reference table.
pub const MIN_PDF_LEN: usize = 32;

/// Validate that `data` plausibly is a PDF document.
///
/// Checks length and the `%PDF-` magic header. This is a gate, not a parse:
/// the codec engine still decides whether the document is actually readable.
pub fn ensure_pdf(data: &[u8]) -> Result<()> {
    if data.len() < MIN_PDF_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check if bytes carry a PDF magic header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    ensure_pdf(data).is_ok()
}

/// Extract the header version string (e.g., "1.7") if present.
pub fn pdf_version(data: &[u8]) -> Option<&str> {
    if !data.starts_with(PDF_MAGIC) {
        return None;
    }
    let rest = &data[PDF_MAGIC.len()..];
    let end = rest
        .iter()
        .position(|b| !b.is_ascii_digit() && *b != b'.')
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    std::str::from_utf8(&rest[..end]).ok()
}
