//! Batch processing of range expressions.
//!
//! - [`driver`] - run a list of expressions and aggregate the exit status

mod driver;

// Re-export public functions
pub use driver::{process_expression, run, BatchStatus};
