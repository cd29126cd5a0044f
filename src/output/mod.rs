//! Output formatting for plan results.
//!
//! - [`terminal`] - terminal output with colors

mod terminal;

pub use terminal::{format_field, print_auto_fit, print_plan};
