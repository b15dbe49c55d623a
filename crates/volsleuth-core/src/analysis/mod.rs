/// Analysis modules — extension matching, categories, and breakdowns.

pub mod breakdown;
pub mod category;
pub mod extension;

pub use breakdown::{category_breakdown, Breakdown, CategoryStats};
pub use category::{category_total, Category, UnknownCategory};
pub use extension::{matches, matches_any};
