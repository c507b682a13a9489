//! Implementations of ports (hexagonal adapters).

mod formatter;
mod store;

pub use formatter::{PatternFormatter, DEFAULT_DISPLAY_FORMAT};
pub use store::{MemoryCardStore, PropertyChange};
