/// Platform-specific functionality — volume detection and capacity queries.

pub mod capacity;
pub mod volumes;

pub use capacity::Capacity;
pub use volumes::{default_candidates, detect, detect_in, VolumeCandidate, EMBEDDED_MOUNTS};
