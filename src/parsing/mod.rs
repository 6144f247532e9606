//! Parsing of textual range expressions.
//!
//! - [`classify`] - pick the grammar from the surface form
//! - [`separator`] - tokenizer for `START SEP END`
//! - [`zone`] - IPv6 zone identifier extraction
//! - [`bare`] - start/end and single-address ranges
//! - [`interval`] - ISO 31-11 bracket intervals
//! - [`cidr`] - networks in CIDR notation

mod bare;
mod cidr;
mod classify;
mod interval;
mod separator;
mod zone;

use crate::error::ExpressionError;
use crate::models::{AddressIter, AddressRange, CidrSpec};

// Re-export public functions
pub use bare::{parse_address, parse_bare_range};
pub use cidr::parse_cidr;
pub use classify::{classify, Form};
pub use interval::{adjust, parse_interval, split_interval, Bound};
pub use separator::{separator_at, split_range};
pub use zone::{common_zone, split_zone};

/// A parsed expression, ready for enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Range(AddressRange),
    Network(CidrSpec),
}

impl Parsed {
    /// The addresses this expression denotes. `hosts_only` only affects
    /// networks.
    pub fn addresses(&self, hosts_only: bool) -> AddressIter {
        match self {
            Parsed::Range(range) => range.addresses(),
            Parsed::Network(net) => net.addresses(hosts_only),
        }
    }

    pub fn zone(&self) -> Option<&str> {
        match self {
            Parsed::Range(range) => range.zone(),
            Parsed::Network(net) => net.zone(),
        }
    }
}

/// Classify and parse one expression. Surrounding whitespace is ignored.
pub fn parse_expression(expr: &str) -> Result<Parsed, ExpressionError> {
    let expr = expr.trim();
    let form = classify(expr);
    log::trace!("classified '{expr}' as {form:?}");
    let parsed = match form {
        Form::Cidr => parse_cidr(expr).map(Parsed::Network),
        Form::Interval => parse_interval(expr).map(Parsed::Range),
        Form::Bare => parse_bare_range(expr).map(Parsed::Range),
    };
    parsed.map_err(|diagnostics| ExpressionError {
        form,
        expression: expr.to_string(),
        diagnostics,
    })
}
