/// Data model for the VolSleuth engine.
///
/// Re-exports the listing row, volume description, and size formatting helpers.
pub mod entry;
pub mod size;
pub mod volume;

pub use entry::{Entry, EntryKind};
pub use volume::Volume;
