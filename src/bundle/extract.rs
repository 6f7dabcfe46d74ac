//! Archive extraction for the bundle pipeline

use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use crate::error::FuseResult;

/// Extract an uploaded ZIP archive into a request-scoped directory
///
/// `dest` is expected to be a freshly created temporary directory owned by
/// the current request; the extracted tree is read-only input for the
/// resolver and is deleted with the directory when the request ends.
pub fn extract_archive(archive_bytes: &[u8], dest: &Path) -> FuseResult<()> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    log::info!(
        "Extracting archive with {} entries to {}",
        archive.len(),
        dest.display()
    );
    archive.extract(dest)?;

    Ok(())
}
