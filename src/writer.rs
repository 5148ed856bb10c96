use crate::article::Article;
use crate::document::Document;
use crate::error::StorageError;
use chrono::NaiveDateTime;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The artifact file name for an article, e.g. `Article_7_20240102_030405.pdf`.
/// The timestamp comes from the article's creation time, so composing the same
/// article again always lands on the same path.
pub fn artifact_name(article_id: u64, created_at: NaiveDateTime) -> String {
    format!(
        "Article_{}_{}.pdf",
        article_id,
        created_at.format("%Y%m%d_%H%M%S")
    )
}

/// Stores composed documents under a single upload directory, one file per article.
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    upload_dir: PathBuf,
}

impl DocumentWriter {
    pub fn new<P: Into<PathBuf>>(upload_dir: P) -> DocumentWriter {
        DocumentWriter {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn artifact_path(&self, article: &Article) -> PathBuf {
        self.upload_dir
            .join(artifact_name(article.id, article.created_at))
    }

    /// Write `document` as the artifact for `article`, replacing any earlier one,
    /// and return where it was written. The upload directory is created if needed.
    ///
    /// The document is serialized before the filesystem is touched and staged in a
    /// temporary file next to the artifact, which is only moved into place once it
    /// is complete. A failed write never leaves a truncated artifact behind.
    pub fn write(&self, document: &Document, article: &Article) -> Result<PathBuf, StorageError> {
        let path = self.artifact_path(article);
        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };

        let bytes = document.to_bytes().map_err(write_err)?;

        fs::create_dir_all(&self.upload_dir).map_err(|source| StorageError::CreateDir {
            path: self.upload_dir.clone(),
            source,
        })?;

        let mut staged = NamedTempFile::new_in(&self.upload_dir).map_err(write_err)?;
        staged.write_all(&bytes).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;

        if self.remove_file(&path)? {
            debug!("replacing previous artifact {}", path.display());
        }
        staged.persist(&path).map_err(|e| write_err(e.error))?;

        info!(
            "wrote article {} ({} pages, {} bytes) to {}",
            article.id,
            document.page_count(),
            bytes.len(),
            path.display()
        );
        Ok(path)
    }

    /// Delete the stored artifact for `article`. Returns whether there was one.
    pub fn remove(&self, article: &Article) -> Result<bool, StorageError> {
        let path = self.artifact_path(article);
        let removed = self.remove_file(&path)?;
        if removed {
            info!("removed artifact {}", path.display());
        }
        Ok(removed)
    }

    fn remove_file(&self, path: &Path) -> Result<bool, StorageError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::RemoveExisting {
                path: path.to_owned(),
                source,
            }),
        }
    }
}
