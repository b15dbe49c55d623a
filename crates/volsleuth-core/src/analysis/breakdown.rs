/// Per-category size breakdown of a directory tree.
///
/// One walk fills every category at once, which is cheaper than calling
/// [`category_total`](super::category::category_total) once per category.
use super::category::Category;
use super::extension::matches_any;
use crate::scanner::accumulate::visit_files;
use std::path::Path;

/// Size and count totals for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub total_size: u64,
    pub file_count: u64,
}

/// Result of [`category_breakdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    /// One row per filtering category, in selector order.
    pub categories: Vec<CategoryStats>,
    /// Everything under the root, matching or not.
    pub total_size: u64,
    pub file_count: u64,
}

impl Breakdown {
    /// Zeroed totals for every filtering category.
    fn empty() -> Self {
        let categories = Category::ALL
            .into_iter()
            .filter(|c| c.is_filter())
            .map(|category| CategoryStats {
                category,
                total_size: 0,
                file_count: 0,
            })
            .collect();
        Self {
            categories,
            total_size: 0,
            file_count: 0,
        }
    }

    /// Count one file. Totals saturate instead of overflowing.
    fn record(&mut self, name: &str, size: u64) {
        self.total_size = self.total_size.saturating_add(size);
        self.file_count = self.file_count.saturating_add(1);
        if let Some(stats) = self
            .categories
            .iter_mut()
            .find(|s| matches_any(name, s.category.extensions()))
        {
            stats.total_size = stats.total_size.saturating_add(size);
            stats.file_count = stats.file_count.saturating_add(1);
        }
    }

    /// Bytes not claimed by any category.
    pub fn uncategorised_size(&self) -> u64 {
        let claimed = self
            .categories
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.total_size));
        self.total_size.saturating_sub(claimed)
    }
}

/// Walk `path` once and total every filtering category.
///
/// A file is counted under the first category whose extensions match it.
pub fn category_breakdown(path: impl AsRef<Path>, max_depth: usize) -> Breakdown {
    let mut breakdown = Breakdown::empty();
    visit_files(path.as_ref(), max_depth, |name, size| {
        breakdown.record(name, size)
    });
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(breakdown: &Breakdown, category: Category) -> &CategoryStats {
        breakdown
            .categories
            .iter()
            .find(|s| s.category == category)
            .unwrap()
    }

    #[test]
    fn test_record_routes_by_extension() {
        let mut breakdown = Breakdown::empty();
        breakdown.record("song.MP3", 40);
        breakdown.record("notes.txt", 10);

        assert_eq!(breakdown.total_size, 50);
        assert_eq!(breakdown.file_count, 2);
        assert_eq!(stats(&breakdown, Category::Mp3).total_size, 40);
        assert_eq!(breakdown.uncategorised_size(), 10);
    }

    #[test]
    fn test_record_saturates() {
        let mut breakdown = Breakdown::empty();
        breakdown.record("huge.iso", u64::MAX);
        breakdown.record("more.iso", 1);

        assert_eq!(breakdown.total_size, u64::MAX);
        assert_eq!(stats(&breakdown, Category::Games).total_size, u64::MAX);
        assert_eq!(stats(&breakdown, Category::Games).file_count, 2);
        assert_eq!(breakdown.uncategorised_size(), 0);
    }
}
