/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Unit ladder, each step a factor of 1024. Scaling stops at the last tier.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count into a human-readable string with appropriate unit.
///
/// The two smallest tiers (B, KB) are printed without decimals; MB and GB
/// always carry two. Values beyond the GB tier stay in GB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut tier = 0;
    while value >= 1024.0 && tier < UNITS.len() - 1 {
        value /= 1024.0;
        tier += 1;
    }

    if tier >= 2 {
        format!("{value:.2} {}", UNITS[tier])
    } else {
        format!("{value:.0} {}", UNITS[tier])
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
