/// Partition registry — probes a fixed list of mount points.
///
/// Candidates are probed in order and only the accessible ones are kept,
/// so the result preserves the candidate list's priority. A volume whose
/// capacity cannot be queried is still reported, with 0/0 capacity.
use super::capacity;
use crate::error::{EngineError, Result};
use crate::model::Volume;
use compact_str::CompactString;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Mount points of the embedded target, in priority order.
pub const EMBEDDED_MOUNTS: [(&str, &str); 4] = [
    ("ux0", "ux0:/"),
    ("ur0", "ur0:/"),
    ("uma0", "uma0:/"),
    ("imc0", "imc0:/"),
];

/// A mount point that may or may not be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VolumeCandidate {
    pub label: String,
    pub path: String,
}

impl VolumeCandidate {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for VolumeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.path)
    }
}

impl FromStr for VolumeCandidate {
    type Err = String;

    /// Parse `LABEL=PATH`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((label, path)) if !label.trim().is_empty() && !path.trim().is_empty() => {
                Ok(Self::new(label.trim(), path.trim()))
            }
            _ => Err(format!("expected LABEL=PATH, got '{s}'")),
        }
    }
}

/// Built-in candidate list for the current target.
pub fn default_candidates() -> Vec<VolumeCandidate> {
    #[cfg(all(unix, not(target_os = "vita")))]
    let list = vec![VolumeCandidate::new("root", "/")];

    #[cfg(windows)]
    let list = vec![VolumeCandidate::new("C", "C:\\")];

    #[cfg(not(any(all(unix, not(target_os = "vita")), windows)))]
    let list = EMBEDDED_MOUNTS
        .iter()
        .map(|(label, path)| VolumeCandidate::new(*label, *path))
        .collect();

    list
}

/// Detect volumes from the built-in candidate list.
pub fn detect() -> Result<Vec<Volume>> {
    detect_in(&default_candidates())
}

/// Probe `candidates` in order and return the ones that are present.
///
/// Fails with [`EngineError::NoVolumesFound`] only when none is present.
pub fn detect_in(candidates: &[VolumeCandidate]) -> Result<Vec<Volume>> {
    let mut volumes = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let path = Path::new(&candidate.path);
        if std::fs::metadata(path).is_err() {
            continue;
        }

        let (total_bytes, free_bytes) = match capacity::query(path) {
            Ok(cap) => (cap.total_bytes, cap.free_bytes),
            Err(err) => {
                warn!("Capacity query failed for {}: {err}", candidate.path);
                (0, 0)
            }
        };

        volumes.push(Volume {
            label: CompactString::new(&candidate.label),
            path: candidate.path.clone(),
            present: true,
            total_bytes,
            free_bytes,
        });
    }

    if volumes.is_empty() {
        warn!("None of {} candidate mounts is accessible", candidates.len());
        return Err(EngineError::NoVolumesFound);
    }

    info!(
        "Detected {} volume(s): {}",
        volumes.len(),
        volumes
            .iter()
            .map(|v| v.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(volumes)
}
