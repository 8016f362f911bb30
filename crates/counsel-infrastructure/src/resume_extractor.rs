//! Plain-text extraction from uploaded PDF resumes.

use counsel_core::CounselError;
use lopdf::Document;
use std::path::Path;

/// Extracts the text of every page, in page order, concatenated without a
/// separator.
///
/// A page whose text cannot be decoded contributes nothing; a document with
/// no extractable text at all is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, CounselError> {
    let document = Document::load_mem(bytes)
        .map_err(|err| CounselError::extraction(format!("Failed to read PDF: {err}")))?;

    let pages = document.get_pages();
    let mut text = String::new();

    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            // lopdf ends every page with a newline of its own.
            Ok(page_text) => {
                text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text))
            }
            Err(err) => {
                tracing::warn!("Skipping page {} of resume: {}", page_number, err);
            }
        }
    }

    if text.trim().is_empty() {
        return Err(CounselError::extraction(format!(
            "No extractable text found in {} page(s)",
            pages.len()
        )));
    }

    tracing::info!(pages = pages.len(), chars = text.len(), "Extracted resume text");
    Ok(text)
}

/// Reads a PDF from disk and extracts its text.
pub fn extract_pdf_file(path: &Path) -> Result<String, CounselError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(CounselError::extraction(format!(
            "{} is not a PDF file",
            path.display()
        )));
    }

    let bytes = std::fs::read(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            CounselError::not_found("file", path.display().to_string())
        } else {
            CounselError::from(err)
        }
    })?;

    extract_pdf_text(&bytes)
}
