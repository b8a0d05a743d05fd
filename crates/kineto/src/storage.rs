//! Persisting generated media to local files.

use kineto_core::MediaPayload;
use kineto_error::{StorageError, StorageErrorKind};
use std::path::Path;
use tracing::{info, instrument};

/// Writes a payload to `destination`, creating parent directories.
///
/// Bytes are written directly and paths are copied; a path that already is
/// the destination is left untouched. URLs are left to the caller to fetch.
///
/// # Errors
///
/// Returns an error if the payload is a URL, the source file is missing, or
/// an I/O operation fails.
#[instrument(skip(payload), fields(destination = %destination.display()))]
pub fn save_payload(payload: &MediaPayload, destination: &Path) -> Result<u64, StorageError> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let written = match payload {
        MediaPayload::Bytes { data, .. } => {
            std::fs::write(destination, data).map_err(|e| io_error(destination, e))?;
            data.len() as u64
        }
        MediaPayload::Path(source) => {
            if !source.is_file() {
                return Err(StorageError::new(StorageErrorKind::NotFound(
                    source.display().to_string(),
                )));
            }
            if is_same_file(source, destination) {
                info!(source = %source.display(), "Payload already at destination");
                return std::fs::metadata(source)
                    .map(|meta| meta.len())
                    .map_err(|e| io_error(source, e));
            }
            std::fs::copy(source, destination).map_err(|e| io_error(source, e))?
        }
        MediaPayload::Url(url) => {
            return Err(StorageError::new(StorageErrorKind::NotPersistable(format!(
                "{} is remote; download it directly",
                url
            ))));
        }
    };

    info!(bytes = written, "Saved payload");
    Ok(written)
}

/// True if both paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[track_caller]
fn io_error(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::new(StorageErrorKind::Io(format!("{}: {}", path.display(), err)))
}
