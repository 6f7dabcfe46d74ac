//! Bundle resolution: primary document selection and asset discovery
//!
//! A [`Bundle`] is a read-only view over an extracted archive's file tree.
//! Asset discovery is bundle-wide on purpose: every `.css`/`.js` file
//! anywhere in the tree is treated as inlinable, whether or not the
//! document references it. Stray files materially affect the output and
//! callers rely on that.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FuseError, FuseResult};

/// Read-only file-tree view over an extracted archive
#[derive(Debug)]
pub struct Bundle {
    documents: Vec<PathBuf>,
    stylesheets: Vec<PathBuf>,
    scripts: Vec<PathBuf>,
}

impl Bundle {
    /// Scan an extracted tree, collecting files by extension
    ///
    /// The walk is sequential and sorted by file name, so repeated scans of
    /// the same tree enumerate assets in the same order. An unreadable
    /// directory entry is fatal for the request — there is no per-file
    /// recovery in this pipeline.
    pub fn scan(root: &Path) -> FuseResult<Self> {
        let mut documents = Vec::new();
        let mut stylesheets = Vec::new();
        let mut scripts = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                FuseError::read_failed(path, source)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.path().extension().and_then(|ext| ext.to_str()) {
                Some("html") => documents.push(entry.into_path()),
                Some("css") => stylesheets.push(entry.into_path()),
                Some("js") => scripts.push(entry.into_path()),
                _ => {}
            }
        }

        // Primary-document rule: shortest path first, then lexicographic.
        // Archives are expected to carry one HTML document; when several
        // exist this keeps the choice independent of enumeration order.
        documents.sort_by_key(|p| (p.components().count(), p.clone()));

        log::debug!(
            "Bundle scan: {} documents, {} stylesheets, {} scripts",
            documents.len(),
            stylesheets.len(),
            scripts.len()
        );

        Ok(Self {
            documents,
            stylesheets,
            scripts,
        })
    }

    /// The HTML document all assets are inlined into
    #[must_use]
    pub fn primary_document(&self) -> Option<&Path> {
        self.documents.first().map(PathBuf::as_path)
    }

    /// Discovered stylesheet files, in discovery order
    #[must_use]
    pub fn stylesheets(&self) -> &[PathBuf] {
        &self.stylesheets
    }

    /// Discovered script files, in discovery order
    #[must_use]
    pub fn scripts(&self) -> &[PathBuf] {
        &self.scripts
    }
}

/// Read one bundle file as UTF-8, with path context on failure
pub fn read_bundle_file(path: &Path) -> FuseResult<String> {
    std::fs::read_to_string(path).map_err(|source| FuseError::read_failed(path, source))
}
