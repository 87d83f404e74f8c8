use bytes::Bytes;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Extensions accepted by the upload endpoint, lowercased, with the dot.
pub static ALLOWED_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| [".pdf", ".doc", ".docx"].into_iter().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Doc,
    Docx,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        if !ALLOWED_EXTENSIONS.contains(extension) {
            return None;
        }
        match extension {
            ".pdf" => Some(FileKind::Pdf),
            ".doc" => Some(FileKind::Doc),
            ".docx" => Some(FileKind::Docx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Pdf => ".pdf",
            FileKind::Doc => ".doc",
            FileKind::Docx => ".docx",
        }
    }

    pub fn supports_extraction(&self) -> bool {
        matches!(self, FileKind::Pdf)
    }
}

/// A file received from the `resume` form field.
///
/// `name` is whatever the client sent and must not be trusted as a path.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub content: Bytes,
    pub extension: String,
}

impl UploadedFile {
    pub fn new(name: String, content: Bytes) -> Self {
        let size = content.len();
        let extension = file_extension(&name);
        Self {
            name,
            size,
            content,
            extension,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_extension(&self.extension)
    }
}

/// Lowercased suffix of the last path component, starting at its last dot.
///
/// Leading dots do not begin an extension, so `.pdf` and `resume` both
/// yield an empty string.
pub fn file_extension(filename: &str) -> String {
    let base = filename.rsplit('/').next().unwrap_or(filename);
    let stem_start = base.len() - base.trim_start_matches('.').len();

    match base.rfind('.') {
        Some(idx) if idx > stem_start => base[idx..].to_lowercase(),
        _ => String::new(),
    }
}
