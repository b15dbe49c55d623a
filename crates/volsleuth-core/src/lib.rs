/// VolSleuth Core — volume detection, size accumulation, and navigation.
///
/// This crate contains all filesystem logic with zero UI dependencies.
/// Every call is synchronous and runs on the calling thread; there is no
/// background worker and no persistent index, so each query re-walks the
/// filesystem.
///
/// # Modules
///
/// - [`model`] — Listing rows, volumes, and size formatting.
/// - [`scanner`] — Depth-bounded accumulation and ranked directory listings.
/// - [`analysis`] — Extension matching, categories, and category breakdowns.
/// - [`platform`] — Mount-point probing and capacity queries.
/// - [`nav`] — Path joining and the breadcrumb stack.
/// - [`ops`] — Entry deletion.
/// - [`config`] — Tunables loaded from TOML.
/// - [`error`] — The engine error type.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod nav;
pub mod ops;
pub mod platform;
pub mod scanner;

pub use error::{EngineError, Result};
