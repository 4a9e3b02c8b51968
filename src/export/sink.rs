//! Where rendered documents end up.

use crate::errors::AppResult;
use crate::export::Document;
use crate::export::fs_utils::ensure_writable;
use std::fs;
use std::path::PathBuf;

pub trait DocumentSink {
    /// Hand the document to the user; returns where it was placed.
    fn deliver(&self, doc: &Document) -> AppResult<PathBuf>;
}

/// Writes documents into a directory (created on demand).
pub struct DirectorySink {
    dir: PathBuf,
    force: bool,
    interactive: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            dir: dir.into(),
            force,
            interactive: false,
        }
    }

    /// Ask before overwriting when attached to a terminal.
    pub fn interactive(mut self, yes: bool) -> Self {
        self.interactive = yes;
        self
    }
}

impl DocumentSink for DirectorySink {
    fn deliver(&self, doc: &Document) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(&doc.file_name);
        ensure_writable(&path, self.force, self.interactive)?;

        fs::write(&path, &doc.bytes)?;
        tracing::debug!(path = %path.display(), bytes = doc.bytes.len(), "document delivered");
        Ok(path)
    }
}
