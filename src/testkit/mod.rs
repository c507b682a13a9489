//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for cards, templates and stored values.
//! - [`editor`] - A due-date editor wired to an in-memory store.

pub mod domain;
pub mod editor;
