/// One-level directory listing ranked by size.
///
/// Children that are directories are sized with the recursive accumulator.
/// Files report their own size and symbolic links report zero. Only the first `working_capacity` children
/// are considered, then the largest `max_items` are returned.
use super::accumulate::accumulate_with;
use crate::config::{EngineConfig, DEFAULT_MAX_DEPTH, DEFAULT_WORKING_CAPACITY};
use crate::error::{EngineError, Result};
use crate::model::Entry;
use compact_str::CompactString;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Tunables for [`scan_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Children collected before ranking. Extra children are dropped.
    pub working_capacity: usize,
    /// Depth bound handed to the accumulator for subdirectories.
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            working_capacity: DEFAULT_WORKING_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&EngineConfig> for ScanOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            working_capacity: config.working_capacity,
            max_depth: config.max_depth,
        }
    }
}

/// List `path` with default options. See [`scan_with`].
pub fn scan(path: impl AsRef<Path>, max_items: usize) -> Result<Vec<Entry>> {
    scan_with(path, max_items, &ScanOptions::default())
}

/// List the immediate children of `path`, largest first, at most `max_items`.
///
/// Fails with [`EngineError::ScanFailed`] only if `path` cannot be opened as
/// a directory. Children whose type or size cannot be read are skipped.
/// Order among equal sizes is unspecified.
pub fn scan_with(
    path: impl AsRef<Path>,
    max_items: usize,
    options: &ScanOptions,
) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let start = Instant::now();

    let read_dir = fs::read_dir(path).map_err(|source| EngineError::ScanFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<Entry> = Vec::new();
    for dirent_result in read_dir {
        if entries.len() >= options.working_capacity {
            debug!(
                "{} has more than {} entries; listing truncated",
                path.display(),
                options.working_capacity
            );
            break;
        }

        let dirent = match dirent_result {
            Ok(d) => d,
            Err(err) => {
                debug!("Skipping unreadable entry in {}: {err}", path.display());
                continue;
            }
        };

        let name = CompactString::new(dirent.file_name().to_string_lossy());
        let file_type = match dirent.file_type() {
            Ok(t) => t,
            Err(err) => {
                debug!("Cannot read type of {name}: {err}");
                continue;
            }
        };

        if file_type.is_dir() {
            let size = accumulate_with(dirent.path(), &[], options.max_depth);
            entries.push(Entry::directory(name, size));
        } else if file_type.is_symlink() {
            entries.push(Entry::file(name, 0));
        } else {
            match dirent.metadata() {
                Ok(meta) => entries.push(Entry::file(name, meta.len())),
                Err(err) => debug!("Cannot stat {name}: {err}"),
            }
        }
    }

    top_by_size(&mut entries, max_items);

    debug!(
        "Scanned {} ({} entries kept) in {:?}",
        path.display(),
        entries.len(),
        start.elapsed()
    );
    Ok(entries)
}

/// Keep the `n` largest entries, sorted descending by size.
///
/// Uses `select_nth_unstable_by` (O(n) average) to bring the top-N to the
/// front, then sorts only those N elements.
fn top_by_size(entries: &mut Vec<Entry>, n: usize) {
    if n == 0 {
        entries.clear();
        return;
    }

    if entries.len() > n {
        entries.select_nth_unstable_by(n - 1, |a, b| b.size.cmp(&a.size));
        entries.truncate(n);
    }
    entries.sort_unstable_by(|a, b| b.size.cmp(&a.size));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(entries: &[Entry]) -> Vec<u64> {
        entries.iter().map(|e| e.size).collect()
    }

    #[test]
    fn test_top_by_size_truncates() {
        let mut entries = vec![
            Entry::file("a", 10),
            Entry::file("b", 30),
            Entry::file("c", 20),
        ];
        top_by_size(&mut entries, 2);
        assert_eq!(sizes(&entries), vec![30, 20]);
    }

    #[test]
    fn test_top_by_size_smaller_than_cap() {
        let mut entries = vec![Entry::file("a", 1), Entry::directory("d", 5)];
        top_by_size(&mut entries, 10);
        assert_eq!(sizes(&entries), vec![5, 1]);
    }

    #[test]
    fn test_top_by_size_zero() {
        let mut entries = vec![Entry::file("a", 1)];
        top_by_size(&mut entries, 0);
        assert!(entries.is_empty());
    }
}
