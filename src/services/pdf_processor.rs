use std::fs::File;
use std::path::Path;
use std::time::Instant;
use lopdf::Document;

use crate::error::{AppError, AppResult};

/// Plain-text extraction from PDF files via `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfProcessor;

#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub text: String,
    pub pages: usize,
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Result for files that are stored but not extracted.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Opens the PDF at `path` and concatenates the text of every page, in
    /// document order, each followed by a single `\n`.
    ///
    /// Any parse or per-page failure aborts the whole extraction; no partial
    /// text is returned. This is blocking and belongs on a blocking thread.
    pub fn extract_text(&self, path: &Path) -> AppResult<ExtractionResult> {
        let start = Instant::now();

        let file = File::open(path)?;
        let doc = Document::load_from(file).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "PDF parse failed");
            AppError::extraction(e.to_string())
        })?;

        let pages = doc.get_pages();
        tracing::debug!(pages = pages.len(), "PDF loaded");

        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = doc.extract_text(&[*page_number]).map_err(|e| {
                tracing::warn!(page = page_number, error = %e, "Page text extraction failed");
                AppError::extraction(e.to_string())
            })?;

            // lopdf ends every text object with a line break; the separator
            // below is the only one a page contributes.
            text.push_str(page_text.trim_end_matches(&['\r', '\n'][..]));
            text.push('\n');
        }

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            pages = pages.len(),
            characters = text.chars().count(),
            processing_time_ms,
            "PDF text extraction completed"
        );

        Ok(ExtractionResult {
            text,
            pages: pages.len(),
            processing_time_ms,
        })
    }
}
