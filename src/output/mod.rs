//! Output formatting.
//!
//! - [`terminal`] - address and error lines

mod terminal;

pub use terminal::{format_error, write_address, PROG};
