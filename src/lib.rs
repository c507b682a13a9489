//! Duedate - the due-date field of a task-board card.
//!
//! A card stores its due date as a string property. This crate reads and
//! writes that string, shows it in the viewer's timezone, and drives the
//! editing session behind the calendar picker.
//!
//! # Modules
//!
//! - [`domain`] - Date ranges, the wire codec, timezone conversion, cards
//! - [`domain::property`] - Property types selected by tag
//! - [`editor`] - Due-date editing session
//! - [`port`] - Mutation dispatcher and date formatter traits
//! - [`adapter`] - In-memory card store and chrono formatter
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use duedate::domain::DateRange;
//!
//! let range = DateRange::decode("1700000000000");
//! assert_eq!(range, DateRange::single(1_700_000_000_000));
//! assert_eq!(range.encode(), r#"{"to":1700000000000}"#);
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
