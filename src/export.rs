//! One-shot export of a rendered document to a file.

use crate::error::{AgendaError, AgendaResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write `document` to `path` as UTF-8, replacing any existing file.
///
/// The file handle is dropped, and therefore closed, on every return path.
///
/// # Errors
///
/// Returns `AgendaError::Export` if the file cannot be created, written or flushed.
pub fn export_document(path: impl AsRef<Path>, document: &str) -> AgendaResult<()> {
    let path = path.as_ref();
    let to_export_error = |source| AgendaError::Export {
        path: path.to_path_buf(),
        source,
    };

    debug!("Opening {} for export", path.display());
    let mut file = File::create(path).map_err(to_export_error)?;
    file.write_all(document.as_bytes()).map_err(to_export_error)?;
    file.flush().map_err(to_export_error)?;

    info!(
        "Exported listing to {} ({} bytes)",
        path.display(),
        document.len()
    );
    Ok(())
}
