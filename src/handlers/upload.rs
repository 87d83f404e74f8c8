use axum::{
    extract::{multipart::MultipartError, multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Json,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::models::{FileKind, UploadResponse, UploadedFile};
use crate::services::{ExtractionResult, PdfProcessor, StoredUpload, TransientStore};

/// Multipart field carrying the resume.
pub const RESUME_FIELD: &str = "resume";

pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let start = Instant::now();

    // A body that is not multipart carries no file parts at all.
    let mut multipart = multipart.map_err(|rejection| {
        debug!(rejection = %rejection, "Request body is not a multipart form");
        AppError::MissingFile
    })?;

    let file = extract_resume_field(&mut multipart, state.config.max_file_size_mb).await?;

    info!(
        file_name = %file.name,
        file_size = file.size,
        extension = %file.extension,
        "File extracted from multipart form"
    );

    let kind = file
        .kind()
        .ok_or_else(|| AppError::unsupported_file_type(file.extension.clone()))?;

    let store = state.store.clone();
    let processor = state.processor;
    let content = file.content.clone();

    let (stored, extraction) = tokio::task::spawn_blocking(move || {
        persist_and_extract(&store, &processor, &content, kind)
    })
    .await??;

    let response = UploadResponse::new(&file.name, &extraction.text, kind.extension());

    match stored.release() {
        Ok(Some(path)) => debug!(path = %path.display(), "Upload retained on disk"),
        Ok(None) => debug!("Upload removed from transient store"),
        Err(e) => warn!(error = %e, "Failed to clean up stored upload"),
    }

    info!(
        file_name = %file.name,
        file_type = %response.file_type,
        pages = extraction.pages,
        extracted_chars = response.file_size,
        total_time_ms = start.elapsed().as_millis() as u64,
        "Upload processed successfully"
    );

    Ok(Json(response))
}

/// Finds the first `resume` file part. Parts without a filename are plain
/// form values, not files, and are skipped.
async fn extract_resume_field(
    multipart: &mut Multipart,
    limit_mb: usize,
) -> AppResult<UploadedFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit_mb))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if file_name.is_empty() {
            return Err(AppError::EmptyFilename);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit_mb))?;

        return Ok(UploadedFile::new(file_name, data));
    }

    Err(AppError::MissingFile)
}

fn multipart_error(err: MultipartError, limit_mb: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge { limit_mb }
    } else {
        AppError::invalid_multipart(err.body_text())
    }
}

/// Writes the upload to the transient store and, for PDFs, extracts its text
/// from the stored copy. Blocking.
pub fn persist_and_extract(
    store: &TransientStore,
    processor: &PdfProcessor,
    content: &[u8],
    kind: FileKind,
) -> AppResult<(StoredUpload, ExtractionResult)> {
    let stored = store.persist(content, kind)?;

    let extraction = if kind.supports_extraction() {
        processor.extract_text(stored.path())?
    } else {
        debug!(extension = kind.extension(), "No extractor for file type, skipping");
        ExtractionResult::empty()
    };

    Ok((stored, extraction))
}
