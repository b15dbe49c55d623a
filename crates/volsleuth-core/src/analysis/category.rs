/// File-type categories used to restrict size accumulation.
///
/// The set is closed. `All` carries no extensions and means "count every
/// file"; every other category lists the extensions that belong to it.
use crate::scanner::accumulate::accumulate_with;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Games,
    Mp3,
    Ogg,
    Photo,
    Video,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 6] = [
        Self::All,
        Self::Games,
        Self::Mp3,
        Self::Ogg,
        Self::Photo,
        Self::Video,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Games => "Games",
            Self::Mp3 => "MP3",
            Self::Ogg => "OGG",
            Self::Photo => "Photo",
            Self::Video => "Video",
        }
    }

    /// Extensions that belong to this category. Empty for `All`.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Games => &[".iso", ".cso", ".pbp", ".bin"],
            Self::Mp3 => &[".mp3"],
            Self::Ogg => &[".ogg"],
            Self::Photo => &[".jpg", ".jpeg"],
            Self::Video => &[".mp4"],
        }
    }

    /// `true` for every category except `All`.
    #[inline]
    pub fn is_filter(self) -> bool {
        self != Self::All
    }

    /// Next category in selector order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Label of the synthetic summary row, e.g. "MP3 total".
    pub fn total_label(self) -> String {
        format!("{} total", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse a label case-insensitively ("mp3", "Photo", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Total bytes under `path` that belong to `category`.
///
/// For `All` this is the plain recursive size of `path`.
pub fn category_total(path: impl AsRef<Path>, category: Category, max_depth: usize) -> u64 {
    accumulate_with(path, category.extensions(), max_depth)
}
