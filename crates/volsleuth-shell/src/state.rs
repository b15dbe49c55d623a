/// Browser state management.
///
/// Centralises all mutable state the frontend reads and writes: the
/// detected volumes, the breadcrumb trail, the active category, and the
/// most recent listing. Queries against the engine are synchronous; to keep
/// rapid navigation cheap they are deferred until a short settle delay has
/// passed, and `tick()` runs them once due.
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use volsleuth_core::analysis::{category_breakdown, category_total, Breakdown, Category};
use volsleuth_core::config::EngineConfig;
use volsleuth_core::model::{Entry, Volume};
use volsleuth_core::nav::{build_path, BreadcrumbStack};
use volsleuth_core::scanner::{scan_with, ScanOptions};
use volsleuth_core::Result;

/// What the last query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Nothing computed yet, or invalidated by a state change.
    Empty,
    /// Ranked children of the current directory.
    Entries(Vec<Entry>),
    /// Aggregate size of the active category under the current directory.
    Summary { category: Category, total_bytes: u64 },
}

impl Listing {
    /// Number of rows this listing renders as.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Entries(entries) => entries.len(),
            Self::Summary { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The listing's real entries; empty for summaries.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Entries(entries) => entries,
            _ => &[],
        }
    }
}

/// A delete waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub name: String,
    pub path: String,
}

/// All browser state.
pub struct BrowserState {
    // ── Volumes ────────────────────────────────────────
    pub volumes: Vec<Volume>,
    pub selected_volume: usize,

    // ── Navigation ─────────────────────────────────────
    pub breadcrumbs: BreadcrumbStack,
    pub category: Category,

    // ── Results ────────────────────────────────────────
    pub listing: Listing,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub last_scan_duration: Option<Duration>,

    // ── Pending work ───────────────────────────────────
    /// When set, a refresh runs at the first `tick` at or after this instant.
    refresh_due: Option<Instant>,
    pub pending_delete: Option<PendingDelete>,

    // ── UI state ───────────────────────────────────────
    /// One-line message for the status bar (errors, confirmations).
    pub status: Option<String>,

    scan_options: ScanOptions,
    max_items: usize,
    refresh_delay: Duration,
    visible_rows: usize,
}

impl BrowserState {
    /// Create state over already-detected volumes.
    ///
    /// The first volume becomes active. Nothing is scanned until
    /// [`refresh`](Self::refresh) or a due [`tick`](Self::tick).
    pub fn new(volumes: Vec<Volume>, config: &EngineConfig) -> Self {
        let mut breadcrumbs = BreadcrumbStack::new(config.nav_depth);
        if let Some(first) = volumes.first() {
            breadcrumbs.init(first.path.clone());
        }

        Self {
            volumes,
            selected_volume: 0,
            breadcrumbs,
            category: Category::All,
            listing: Listing::Empty,
            cursor: 0,
            scroll_offset: 0,
            last_scan_duration: None,
            refresh_due: None,
            pending_delete: None,
            status: None,
            scan_options: ScanOptions::from(config),
            max_items: config.max_items,
            refresh_delay: Duration::from_millis(config.refresh_delay_ms),
            visible_rows: config.visible_rows.max(1),
        }
    }

    /// The active volume, if any were detected.
    pub fn current_volume(&self) -> Option<&Volume> {
        self.volumes.get(self.selected_volume)
    }

    /// Directory currently being browsed.
    pub fn current_path(&self) -> &str {
        self.breadcrumbs.current()
    }

    // ── Refresh scheduling ─────────────────────────────

    /// Defer a refresh until the settle delay has elapsed from `now`.
    ///
    /// Repeated calls push the deadline back, so a burst of navigation
    /// produces a single walk.
    pub fn schedule_refresh(&mut self, now: Instant) {
        self.refresh_due = Some(now + self.refresh_delay);
    }

    /// `true` while a deferred refresh is waiting.
    pub fn is_refresh_pending(&self) -> bool {
        self.refresh_due.is_some()
    }

    /// Instant at which the pending refresh becomes due.
    pub fn refresh_deadline(&self) -> Option<Instant> {
        self.refresh_due
    }

    /// Run the pending refresh if it is due. Returns `true` if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.refresh_due {
            Some(due) if now >= due => {
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Re-query the engine for the current directory and category.
    ///
    /// A directory that cannot be opened shows as an empty listing with
    /// the error in the status line.
    pub fn refresh(&mut self) {
        self.refresh_due = None;
        let start = Instant::now();
        let path = self.current_path().to_string();

        self.listing = if self.category.is_filter() {
            let total_bytes = category_total(&path, self.category, self.scan_options.max_depth);
            Listing::Summary {
                category: self.category,
                total_bytes,
            }
        } else {
            match scan_with(&path, self.max_items, &self.scan_options) {
                Ok(entries) => Listing::Entries(entries),
                Err(err) => {
                    self.status = Some(err.to_string());
                    Listing::Empty
                }
            }
        };

        self.last_scan_duration = Some(start.elapsed());
        self.clamp_cursor();
        debug!(
            "Refreshed {} [{}]: {} rows in {:?}",
            path,
            self.category,
            self.listing.len(),
            start.elapsed()
        );
    }

    // ── Volumes ────────────────────────────────────────

    /// Make `index` the active volume. Returns `false` if out of range or
    /// already active.
    pub fn select_volume(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.volumes.len() || index == self.selected_volume {
            return false;
        }
        self.selected_volume = index;
        let root = self.volumes[index].path.clone();
        info!("Switched to volume {}", self.volumes[index].label);
        self.breadcrumbs.init(root);
        self.listing = Listing::Empty;
        self.reset_view();
        self.schedule_refresh(now);
        true
    }

    /// Select the next volume, wrapping around.
    pub fn next_volume(&mut self, now: Instant) -> bool {
        if self.volumes.len() < 2 {
            return false;
        }
        let next = (self.selected_volume + 1) % self.volumes.len();
        self.select_volume(next, now)
    }

    /// Select the previous volume, wrapping around.
    pub fn prev_volume(&mut self, now: Instant) -> bool {
        if self.volumes.len() < 2 {
            return false;
        }
        let len = self.volumes.len();
        let prev = (self.selected_volume + len - 1) % len;
        self.select_volume(prev, now)
    }

    // ── Categories ─────────────────────────────────────

    /// Switch the active category. Any previous listing is discarded.
    pub fn set_category(&mut self, category: Category, now: Instant) {
        if category == self.category && !self.listing.is_empty() {
            return;
        }
        self.category = category;
        self.listing = Listing::Empty;
        self.reset_view();
        self.schedule_refresh(now);
    }

    /// Advance to the next category in selector order.
    pub fn cycle_category(&mut self, now: Instant) {
        let next = self.category.next();
        self.set_category(next, now);
    }

    /// Per-category totals for the current directory.
    pub fn breakdown(&self) -> Breakdown {
        category_breakdown(self.current_path(), self.scan_options.max_depth)
    }

    // ── Navigation ─────────────────────────────────────

    /// Whether the row at `index` can be entered.
    ///
    /// Directories are recognised by their entry kind, falling back to a
    /// filesystem check on the joined path.
    pub fn is_enterable(&self, index: usize) -> bool {
        match self.listing.entries().get(index) {
            Some(entry) => {
                entry.is_dir()
                    || std::path::Path::new(&build_path(self.current_path(), &entry.name)).is_dir()
            }
            None => false,
        }
    }

    /// Enter the directory at row `index`.
    pub fn enter(&mut self, index: usize, now: Instant) -> bool {
        if !self.is_enterable(index) {
            return false;
        }
        let name = self.listing.entries()[index].name.clone();
        let path = build_path(self.current_path(), &name);

        match self.breadcrumbs.push(path) {
            Ok(()) => {
                self.listing = Listing::Empty;
                self.reset_view();
                self.schedule_refresh(now);
                true
            }
            Err(err) => {
                self.status = Some(err.to_string());
                false
            }
        }
    }

    /// Enter the directory under the cursor.
    pub fn enter_selected(&mut self, now: Instant) -> bool {
        self.enter(self.cursor, now)
    }

    /// Go up one level. Does nothing at the volume root.
    pub fn back(&mut self, now: Instant) -> bool {
        if self.breadcrumbs.depth() <= 1 {
            return false;
        }
        match self.breadcrumbs.pop() {
            Ok(_) => {
                self.listing = Listing::Empty;
                self.reset_view();
                self.schedule_refresh(now);
                true
            }
            Err(_) => false,
        }
    }

    // ── Cursor and scrolling ───────────────────────────

    /// Move the cursor by `delta` rows, keeping it inside the scroll window.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.listing.len();
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
        self.follow_cursor();
    }

    /// Row indices currently inside the scroll window.
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.listing.len();
        let start = self.scroll_offset.min(len);
        let end = (start + self.visible_rows).min(len);
        start..end
    }

    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = self.cursor + 1 - self.visible_rows;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.listing.len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
        let max_offset = len.saturating_sub(self.visible_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        self.follow_cursor();
    }

    fn reset_view(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
        self.pending_delete = None;
    }

    // ── Deletion ───────────────────────────────────────

    /// Stage the entry at row `index` for deletion. Returns `false` if there
    /// is no such entry.
    pub fn request_delete(&mut self, index: usize) -> bool {
        let Some(entry) = self.listing.entries().get(index) else {
            return false;
        };
        let pending = PendingDelete {
            name: entry.display_name().to_string(),
            path: build_path(self.current_path(), &entry.name),
        };
        self.status = Some(format!("Delete {}? (yes/no)", pending.name));
        self.pending_delete = Some(pending);
        true
    }

    /// Carry out the staged delete, then rescan whatever the outcome.
    ///
    /// Returns `None` if nothing was staged.
    pub fn confirm_delete(&mut self) -> Option<Result<()>> {
        let pending = self.pending_delete.take()?;

        let result = volsleuth_core::ops::delete(&pending.path);
        self.status = Some(match &result {
            Ok(()) => format!("Deleted {}", pending.name),
            Err(err) => err.to_string(),
        });
        self.refresh();
        Some(result)
    }

    /// Drop the staged delete.
    pub fn cancel_delete(&mut self) {
        if self.pending_delete.take().is_some() {
            self.status = Some("Delete cancelled".to_string());
        }
    }
}
