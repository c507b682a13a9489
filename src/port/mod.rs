//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the due-date logic and the host application.
//!
//! ```text
//!            ┌─────────────────────────┐
//!            │   Editor + Property     │
//!            │        types            │
//!            └───────────┬─────────────┘
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   ┌─────────────┐             ┌─────────────┐
//!   │  Mutator    │             │  Formatter  │
//!   │  Adapter    │             │   Adapter   │
//!   └─────────────┘             └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PropertyMutator`] - Persists property changes on a card
//! - [`DateFormatter`] - Locale-aware rendering and parsing of dates

mod formatter;
mod mutator;

pub use formatter::DateFormatter;
pub use mutator::PropertyMutator;
