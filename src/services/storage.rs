use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::models::FileKind;

const STORED_FILE_PREFIX: &str = "upload-";

/// Scratch directory for uploads that are being processed.
///
/// Files are named by the store, never by the client: each upload gets a
/// fresh `upload-<random><ext>` name created with exclusive-create semantics,
/// so concurrent uploads cannot overwrite one another.
#[derive(Debug, Clone)]
pub struct TransientStore {
    dir: PathBuf,
    retain: bool,
}

impl TransientStore {
    /// Opens the store, creating `dir` if it is missing.
    pub fn new(dir: impl Into<PathBuf>, retain: bool) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::info!(upload_dir = %dir.display(), retain, "Transient upload store ready");
        Ok(Self { dir, retain })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn persist(&self, content: &[u8], kind: FileKind) -> io::Result<StoredUpload> {
        let mut file = tempfile::Builder::new()
            .prefix(STORED_FILE_PREFIX)
            .suffix(kind.extension())
            .tempfile_in(&self.dir)?;

        file.write_all(content)?;
        file.flush()?;

        tracing::debug!(
            path = %file.path().display(),
            bytes = content.len(),
            "Upload written to transient store"
        );

        Ok(StoredUpload {
            file,
            retain: self.retain,
        })
    }
}

/// A stored upload. Dropping it deletes the file; `release` does the same
/// unless the store was opened with retention.
#[derive(Debug)]
pub struct StoredUpload {
    file: NamedTempFile,
    retain: bool,
}

impl StoredUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Ends the upload's lifetime. Returns the kept path when retained.
    pub fn release(self) -> io::Result<Option<PathBuf>> {
        if self.retain {
            let (_, path) = self.file.keep().map_err(|e| e.error)?;
            Ok(Some(path))
        } else {
            self.file.close()?;
            Ok(None)
        }
    }
}
