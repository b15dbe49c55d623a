/// Text rendering of the browser state.
///
/// Pure functions from state to strings; the binary decides where they go.
use crate::state::{BrowserState, Listing};
use std::fmt::Write;
use volsleuth_core::analysis::Breakdown;
use volsleuth_core::model::size::{format_count, format_size};
use volsleuth_core::model::Volume;

/// Width of the name column in listing rows.
const NAME_WIDTH: usize = 32;

/// Width of the proportional size bar.
const BAR_WIDTH: usize = 20;

/// Draw a horizontal bar with `percent` (0–100) of its cells filled.
pub fn size_bar(percent: f32, width: usize) -> String {
    let filled = ((percent / 100.0).clamp(0.0, 1.0) * width as f32).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('#').take(filled));
    bar.extend(std::iter::repeat('.').take(width - filled));
    bar.push(']');
    bar
}

/// Shorten `text` to at most `max_chars`, keeping the tail.
pub fn truncate_path(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = text.chars().skip(count - keep).collect();
    format!("...{tail}")
}

/// One line per volume: label, mount root, used/free/total, usage bar.
pub fn render_volumes(volumes: &[Volume], selected: usize) -> String {
    let mut out = String::new();
    for (i, volume) in volumes.iter().enumerate() {
        let marker = if i == selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}. {:<6} {:<8} Used: {} | Free: {} | Total: {} {}",
            i + 1,
            volume.label.as_str(),
            volume.path,
            format_size(volume.used_bytes()),
            format_size(volume.free_bytes),
            format_size(volume.total_bytes),
            size_bar(volume.usage_percent(), 10),
        );
    }
    out
}

/// The breadcrumb trail, e.g. `ux0:/ > data > music`.
pub fn render_breadcrumbs(state: &BrowserState) -> String {
    let mut parts = state.breadcrumbs.iter();
    let mut out = parts.next().unwrap_or(state.current_path()).to_string();
    for path in parts {
        let name = path
            .rsplit(|c: char| std::path::is_separator(c))
            .find(|s| !s.is_empty())
            .unwrap_or(path);
        out.push_str(" > ");
        out.push_str(name);
    }
    out
}

/// Rows inside the scroll window with rank, name, size, and bar.
pub fn render_listing(state: &BrowserState) -> String {
    let mut out = String::new();
    match &state.listing {
        Listing::Empty => {
            let text = if state.is_refresh_pending() {
                "  Calculating..."
            } else {
                "  (empty)"
            };
            let _ = writeln!(out, "{text}");
        }
        Listing::Summary {
            category,
            total_bytes,
        } => {
            let _ = writeln!(
                out,
                "> 1. {:<width$}  {:>12}",
                category.total_label(),
                format_size(*total_bytes),
                width = NAME_WIDTH
            );
        }
        Listing::Entries(entries) => {
            // Bars are relative to the largest row, which is always first.
            let largest = entries.first().map(|e| e.size).unwrap_or(0);
            for i in state.visible_range() {
                let entry = &entries[i];
                let percent = if largest > 0 {
                    (entry.size as f64 / largest as f64 * 100.0) as f32
                } else {
                    0.0
                };
                let marker = if i == state.cursor { '>' } else { ' ' };
                let _ = writeln!(
                    out,
                    "{marker}{:>3}. {:<width$}  {:>12} {}",
                    i + 1,
                    truncate_path(&entry.display_name(), NAME_WIDTH),
                    format_size(entry.size),
                    size_bar(percent, BAR_WIDTH),
                    width = NAME_WIDTH,
                );
            }
            let range = state.visible_range();
            if range.len() < entries.len() {
                let _ = writeln!(
                    out,
                    "      rows {}-{} of {}",
                    range.start + 1,
                    range.end,
                    format_count(entries.len() as u64)
                );
            }
        }
    }
    out
}

/// Per-category totals as a small table.
pub fn render_breakdown(breakdown: &Breakdown) -> String {
    let mut out = String::new();
    for stats in &breakdown.categories {
        let _ = writeln!(
            out,
            "  {:<8} {:>12}  {:>8} files",
            stats.category.label(),
            format_size(stats.total_size),
            format_count(stats.file_count)
        );
    }
    let _ = writeln!(
        out,
        "  {:<8} {:>12}",
        "Other",
        format_size(breakdown.uncategorised_size())
    );
    let _ = writeln!(
        out,
        "  {:<8} {:>12}  {:>8} files",
        "Total",
        format_size(breakdown.total_size),
        format_count(breakdown.file_count)
    );
    out
}

/// Full screen: volumes, filter, trail, listing, status line.
pub fn render(state: &BrowserState) -> String {
    let mut out = render_volumes(&state.volumes, state.selected_volume);
    let _ = writeln!(out, "Filter: {}", state.category);
    let _ = writeln!(out, "{}", truncate_path(&render_breadcrumbs(state), 72));
    out.push_str(&render_listing(state));

    if let Some(status) = &state.status {
        let _ = writeln!(out, "-- {status}");
    } else if let Some(duration) = state.last_scan_duration {
        let _ = writeln!(
            out,
            "-- {} rows in {:.0?}",
            format_count(state.listing.len() as u64),
            duration
        );
    }
    out
}
