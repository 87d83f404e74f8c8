use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Resume Analyzer Backend";
pub const PREVIEW_CHAR_LIMIT: usize = 500;
pub const NO_TEXT_PLACEHOLDER: &str = "Text extraction not available for this file type";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: format!("{} is running!", SERVICE_NAME),
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub text: String,
    /// Character count of the extracted text, not the upload's byte size.
    pub file_size: usize,
    pub file_type: String,
}

impl UploadResponse {
    pub fn new(file_name: &str, extracted_text: &str, file_type: &str) -> Self {
        let text = if extracted_text.is_empty() {
            NO_TEXT_PLACEHOLDER.to_string()
        } else {
            preview(extracted_text, PREVIEW_CHAR_LIMIT)
        };

        Self {
            message: format!("File {} uploaded successfully!", file_name),
            text,
            file_size: extracted_text.chars().count(),
            file_type: file_type.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// First `limit` characters of `text`, never splitting a code point.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
