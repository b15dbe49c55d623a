/// A mounted storage volume and its capacity snapshot.
///
/// Capacity numbers are taken once during detection and are not refreshed
/// in place; re-run detection to get current figures.
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Short name, e.g. "ux0".
    pub label: CompactString,
    /// Mount root, e.g. "ux0:/".
    pub path: String,
    /// `true` if the mount point was accessible during detection.
    pub present: bool,
    /// Total capacity in bytes, or 0 if the capacity query failed.
    pub total_bytes: u64,
    /// Free capacity in bytes, never above `total_bytes`.
    pub free_bytes: u64,
}

impl Volume {
    /// Used space in bytes.
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Usage percentage (0.0–100.0). Zero when capacity is unknown.
    pub fn usage_percent(&self) -> f32 {
        if self.total_bytes > 0 {
            (self.used_bytes() as f64 / self.total_bytes as f64 * 100.0) as f32
        } else {
            0.0
        }
    }
}
