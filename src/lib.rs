// cargo watch -x 'fmt' -x 'test'

//! Enumerate the addresses of textual IPv4/IPv6 range expressions.
//!
//! Accepted forms are CIDR networks, start/end pairs with a variety of
//! separators, single addresses and ISO 31-11 intervals, optionally with an
//! IPv6 zone identifier. Addresses are produced lazily, so even an IPv6 `/0`
//! streams in constant memory.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsing;
pub mod processing;

pub use config::Options;
pub use error::{Diagnostics, ExpressionError, RangeError, Side};
pub use parsing::{parse_expression, Parsed};
pub use processing::{run, BatchStatus};
