/// VolSleuth shell — browser state and text frontend.
///
/// This crate holds the interactive layer. Filesystem logic lives in
/// `volsleuth-core`.
pub mod command;
pub mod export;
pub mod render;
pub mod state;

pub use command::{Command, ParseError};
pub use state::{BrowserState, Listing};
