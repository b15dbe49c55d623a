/// Mutating operations on the filesystem.
pub mod delete;

pub use delete::delete;
