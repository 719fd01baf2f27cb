//! Reads the rendered résumé back in as plain text for the prompt.

use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Extracts the text of the first page of a PDF.
pub fn first_page_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::MissingInput(format!(
            "résumé PDF {} not found; run `create` first",
            path.display()
        )),
        _ => AppError::Io(e),
    })?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| AppError::Pdf(format!("could not read {}: {e}", path.display())))?;

    let first = pages
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Pdf(format!("{} has no pages", path.display())))?;

    debug!("Extracted {} characters from {}", first.len(), path.display());
    Ok(first)
}
