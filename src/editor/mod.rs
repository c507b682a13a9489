//! Editing sessions for card fields.
//!
//! An editor owns the state of one field while the user works on it: the
//! current stored value, the text in its inputs, and the calendar mode.
//! Every user action is a synchronous method call; changes are written
//! through a [`PropertyMutator`](crate::port::PropertyMutator) as they
//! happen.

mod due_date;
mod selection;

pub use due_date::{DueDateEditor, EMPTY_PLACEHOLDER};
pub use selection::add_day_to_range;
