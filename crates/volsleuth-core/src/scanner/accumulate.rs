/// Recursive, depth-bounded size accumulation.
///
/// Walks serially on the calling thread using `jwalk` with
/// `Parallelism::Serial`. Symbolic links are never followed and count as
/// zero bytes. Directories nested deeper than `max_depth` are not read, so
/// malformed or cyclic trees cannot recurse without bound. Anything that
/// cannot be read contributes zero rather than failing the whole walk.
use crate::analysis::extension::matches_any;
use crate::config::DEFAULT_MAX_DEPTH;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Total size of `path` using the default depth bound.
///
/// See [`accumulate_with`].
pub fn accumulate(path: impl AsRef<Path>, extensions: &[&str]) -> u64 {
    accumulate_with(path, extensions, DEFAULT_MAX_DEPTH)
}

/// Total size of all files under `path`.
///
/// - A non-directory `path` yields its own size; a missing one yields 0.
/// - With an empty `extensions` set every file counts; otherwise only files
///   whose name matches one of the patterns. Directories are always entered.
/// - The root is depth 0; directories deeper than `max_depth` contribute 0.
pub fn accumulate_with(path: impl AsRef<Path>, extensions: &[&str], max_depth: usize) -> u64 {
    let path = path.as_ref();
    let start = Instant::now();
    let mut total: u64 = 0;

    visit_files(path, max_depth, |name, size| {
        if extensions.is_empty() || matches_any(name, extensions) {
            total = total.saturating_add(size);
        }
    });

    debug!(
        "Accumulated {} bytes under {} in {:?}",
        total,
        path.display(),
        start.elapsed()
    );
    total
}

/// Call `visit(file_name, size)` for every file under `path`.
///
/// Symbolic links are not files here: they are neither followed nor visited.
///
/// Shared by [`accumulate_with`] and the category breakdown so both apply
/// the same depth bound and error policy.
pub(crate) fn visit_files<F>(path: &Path, max_depth: usize, mut visit: F)
where
    F: FnMut(&str, u64),
{
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            debug!("Cannot stat {}: {err}", path.display());
            return;
        }
    };

    if !meta.is_dir() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        visit(&*name, meta.len());
        return;
    }

    // Entries of a directory at depth `d` sit at depth `d + 1`, so reading
    // directories up to `max_depth` means yielding entries up to `max_depth + 1`.
    let walker = jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .parallelism(jwalk::Parallelism::Serial);

    let mut skipped: u64 = 0;
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access denied on a subdirectory.
                skipped += 1;
                debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() || file_type.is_symlink() {
            continue;
        }

        let size = match fs::symlink_metadata(entry.path()) {
            Ok(meta) => meta.len(),
            Err(err) => {
                skipped += 1;
                debug!("Cannot stat {}: {err}", entry.path().display());
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        visit(&*file_name, size);
    }

    if skipped > 0 {
        debug!("{skipped} entries under {} were unreadable", path.display());
    }
}
