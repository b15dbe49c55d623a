/// Entry deletion.
///
/// Not transactional: if removing a directory fails midway, whatever was
/// already removed stays removed and the caller only sees the error. Cached
/// listings are stale after any attempt, successful or not, so callers
/// rescan either way.
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Remove the file, symlink, or directory tree at `path`.
///
/// Symlinks are unlinked, never followed.
pub fn delete(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let fail = |source: std::io::Error| EngineError::DeleteFailed {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::symlink_metadata(path).map_err(fail)?;
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            info!("Deleted {}", path.display());
            Ok(())
        }
        Err(source) => {
            warn!("Delete of {} failed: {source}", path.display());
            Err(fail(source))
        }
    }
}
