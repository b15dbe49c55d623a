/// End-to-end engine integration tests.
///
/// These tests exercise volume detection, ranked listings, category totals,
/// navigation and deletion against a real temporary filesystem. Nothing is
/// mocked: `tempfile` gives every test its own directory tree.
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use volsleuth_core::analysis::{category_breakdown, category_total, Category};
use volsleuth_core::config::{EngineConfig, DEFAULT_MAX_DEPTH};
use volsleuth_core::model::EntryKind;
use volsleuth_core::nav::{build_path, BreadcrumbStack};
use volsleuth_core::ops::delete;
use volsleuth_core::platform::{detect_in, VolumeCandidate};
use volsleuth_core::scanner::{accumulate, scan, scan_with, ScanOptions};
use volsleuth_core::EngineError;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create a reproducible directory tree:
///
/// ```text
/// root/
///   games/
///     a.iso     (400 bytes)
///     saves/
///       s.bin   (100 bytes)
///   music/
///     x.mp3     (200 bytes)
///     y.ogg     (150 bytes)
///   photo.JPG   (50 bytes)
///   notes.txt   (10 bytes)
/// ```
///
/// Total file bytes: 910.
fn build_test_tree(root: &Path) {
    let games = root.join("games");
    let saves = games.join("saves");
    let music = root.join("music");
    fs::create_dir_all(&saves).unwrap();
    fs::create_dir_all(&music).unwrap();

    write_bytes(&games.join("a.iso"), 400);
    write_bytes(&saves.join("s.bin"), 100);
    write_bytes(&music.join("x.mp3"), 200);
    write_bytes(&music.join("y.ogg"), 150);
    write_bytes(&root.join("photo.JPG"), 50);
    write_bytes(&root.join("notes.txt"), 10);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ── Listing ──────────────────────────────────────────────────────────────────

/// Directories report recursive sizes, files their own, largest first.
#[test]
fn scan_ranks_children_by_size() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let entries = scan(tmp.path(), 10).unwrap();
    let rows: Vec<(&str, u64, EntryKind)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.size, e.kind))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("games", 500, EntryKind::Directory),
            ("music", 350, EntryKind::Directory),
            ("photo.JPG", 50, EntryKind::File),
            ("notes.txt", 10, EntryKind::File),
        ]
    );
}

/// `max_items` caps the result at the largest N.
#[test]
fn scan_truncates_to_max_items() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("ten"), 10);
    write_bytes(&tmp.path().join("thirty"), 30);
    write_bytes(&tmp.path().join("twenty"), 20);

    let entries = scan(tmp.path(), 2).unwrap();
    let sizes: Vec<u64> = entries.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![30, 20]);
}

/// A zero cap yields an empty listing rather than an error.
#[test]
fn scan_zero_items_is_empty() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    assert!(scan(tmp.path(), 0).unwrap().is_empty());
}

/// Only `working_capacity` children are considered before ranking.
#[test]
fn scan_respects_working_capacity() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for i in 0..20 {
        write_bytes(&tmp.path().join(format!("file{i:02}.bin")), i + 1);
    }

    let options = ScanOptions {
        working_capacity: 5,
        max_depth: DEFAULT_MAX_DEPTH,
    };
    let entries = scan_with(tmp.path(), 100, &options).unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries.windows(2).all(|w| w[0].size >= w[1].size));
}

/// Opening something that is not a directory is a `ScanFailed`.
#[test]
fn scan_missing_directory_fails() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let err = scan(tmp.path().join("missing"), 10).unwrap_err();
    assert!(matches!(err, EngineError::ScanFailed { .. }));

    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 1);
    assert!(matches!(
        scan(&file, 10).unwrap_err(),
        EngineError::ScanFailed { .. }
    ));
}

/// Two scans of an unchanged tree agree on names and sizes.
#[test]
fn scan_is_idempotent() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let first = scan(tmp.path(), 10).unwrap();
    let second = scan(tmp.path(), 10).unwrap();
    assert_eq!(first, second);
}

// ── Accumulation and categories ──────────────────────────────────────────────

/// Unfiltered accumulation equals the sum of every file.
#[test]
fn accumulate_whole_tree() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    assert_eq!(accumulate(tmp.path(), &[]), 910);
}

/// Category totals only count matching files, case-insensitively.
#[test]
fn category_totals_filter_by_extension() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let total = |c| category_total(tmp.path(), c, DEFAULT_MAX_DEPTH);
    assert_eq!(total(Category::All), 910);
    assert_eq!(total(Category::Games), 500);
    assert_eq!(total(Category::Mp3), 200);
    assert_eq!(total(Category::Ogg), 150);
    assert_eq!(total(Category::Photo), 50);
    assert_eq!(total(Category::Video), 0);
}

/// One breakdown walk agrees with the per-category totals.
#[test]
fn breakdown_matches_category_totals() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let breakdown = category_breakdown(tmp.path(), DEFAULT_MAX_DEPTH);
    assert_eq!(breakdown.total_size, 910);
    assert_eq!(breakdown.file_count, 6);
    for stats in &breakdown.categories {
        assert_eq!(
            stats.total_size,
            category_total(tmp.path(), stats.category, DEFAULT_MAX_DEPTH),
            "mismatch for {}",
            stats.category
        );
    }
    assert_eq!(breakdown.uncategorised_size(), 10);
}

// ── Volumes ──────────────────────────────────────────────────────────────────

/// No accessible candidate means `NoVolumesFound`.
#[test]
fn detect_with_no_present_mounts_fails() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let candidates = vec![
        VolumeCandidate::new("ux0", path_str(&tmp.path().join("ux0"))),
        VolumeCandidate::new("ur0", path_str(&tmp.path().join("ur0"))),
    ];
    assert!(matches!(
        detect_in(&candidates),
        Err(EngineError::NoVolumesFound)
    ));
}

/// Only present candidates are returned, in candidate order.
#[test]
fn detect_keeps_present_mounts_in_order() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let ux0 = tmp.path().join("ux0");
    let uma0 = tmp.path().join("uma0");
    fs::create_dir(&ux0).unwrap();
    fs::create_dir(&uma0).unwrap();

    let candidates = vec![
        VolumeCandidate::new("ux0", path_str(&ux0)),
        VolumeCandidate::new("ur0", path_str(&tmp.path().join("ur0"))),
        VolumeCandidate::new("uma0", path_str(&uma0)),
    ];
    let volumes = detect_in(&candidates).unwrap();
    let labels: Vec<&str> = volumes.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["ux0", "uma0"]);
    assert_eq!(volumes[0].path, path_str(&ux0));
    assert!(volumes.iter().all(|v| v.present));
    assert!(volumes.iter().all(|v| v.free_bytes <= v.total_bytes));
}

/// A single present mount yields a single volume.
#[test]
fn detect_single_mount() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let config = EngineConfig {
        volumes: Some(vec![VolumeCandidate::new("data", path_str(tmp.path()))]),
        ..EngineConfig::default()
    };

    let volumes = detect_in(&config.candidates()).unwrap();
    assert_eq!(volumes.len(), 1);
    assert_eq!(volumes[0].label, "data");
    assert_eq!(volumes[0].path, path_str(tmp.path()));
}

// ── Navigation and deletion ──────────────────────────────────────────────────

/// Breadcrumbs built with `build_path` address real subdirectories.
#[test]
fn navigate_into_and_out_of_subdirectory() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    let root = path_str(tmp.path());

    let mut crumbs = BreadcrumbStack::default();
    crumbs.init(root.clone());
    crumbs.push(build_path(crumbs.current(), "games")).unwrap();

    let entries = scan(crumbs.current(), 10).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a.iso", "saves"]);

    crumbs.pop().unwrap();
    assert_eq!(crumbs.current(), root);
}

/// Deleting a directory removes its whole subtree and a rescan reflects it.
#[test]
fn delete_then_rescan() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    let root = path_str(tmp.path());

    delete(build_path(&root, "music")).unwrap();

    let entries = scan(tmp.path(), 10).unwrap();
    assert!(entries.iter().all(|e| e.name != "music"));
    assert_eq!(accumulate(tmp.path(), &[]), 560);
}

// ── Unreadable and cyclic trees ──────────────────────────────────────────────

/// Restores a directory's permissions on drop so `TempDir` can clean up.
#[cfg(unix)]
struct LockedDir<'a>(&'a Path);

#[cfg(unix)]
impl<'a> LockedDir<'a> {
    fn lock(path: &'a Path) -> Self {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        Self(path)
    }
}

#[cfg(unix)]
impl Drop for LockedDir<'_> {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(self.0, fs::Permissions::from_mode(0o755));
    }
}

/// An unreadable subdirectory contributes zero without failing its parent.
#[cfg(unix)]
#[test]
fn unreadable_subdirectory_counts_as_zero() {
    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_bytes(&locked.join("hidden.bin"), 100);
    write_bytes(&tmp.path().join("top.bin"), 7);

    let _guard = LockedDir::lock(&locked);
    if fs::read_dir(&locked).is_ok() {
        // Privileged users bypass directory permissions.
        return;
    }

    assert_eq!(accumulate(tmp.path(), &[]), 7);

    let entries = scan(tmp.path(), 10).unwrap();
    let rows: Vec<(&str, u64)> = entries.iter().map(|e| (e.name.as_str(), e.size)).collect();
    assert_eq!(rows, vec![("top.bin", 7), ("locked", 0)]);
}

/// A symlink pointing back at the root is neither followed nor counted.
#[cfg(unix)]
#[test]
fn symlink_cycle_terminates_and_counts_real_bytes() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a");
    fs::create_dir(&a).unwrap();
    write_bytes(&a.join("f.bin"), 5);
    std::os::unix::fs::symlink(tmp.path(), a.join("loop")).unwrap();
    std::os::unix::fs::symlink(&a, tmp.path().join("shortcut")).unwrap();

    assert_eq!(accumulate(tmp.path(), &[]), 5);

    let entries = scan(tmp.path(), 10).unwrap();
    let rows: Vec<(&str, u64, EntryKind)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.size, e.kind))
        .collect();
    assert_eq!(
        rows,
        vec![("a", 5, EntryKind::Directory), ("shortcut", 0, EntryKind::File)]
    );
}
