/// Scanner module — size accumulation and ranked directory listings.
///
/// Everything here is synchronous and runs on the calling thread. A large
/// tree blocks the caller for the duration of the walk; debouncing rescans
/// is the frontend's job.
pub mod accumulate;
pub mod directory;

pub use accumulate::{accumulate, accumulate_with};
pub use directory::{scan, scan_with, ScanOptions};
