//! Error kinds reported while parsing a range expression.
//!
//! Every error is local to one expression: the driver reports it and moves on
//! to the next input. [`Diagnostics`] collects the errors of one expression,
//! [`ExpressionError`] attaches the expression text for the final error line.

use itertools::Itertools;
use std::fmt;

use crate::parsing::Form;

/// Which token of an expression an address error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// First address of a start/end pair.
    Start,
    /// Second address of a start/end pair.
    End,
    /// The single address of a degenerate range.
    Only,
    /// Network address of a CIDR expression.
    Network,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Start => write!(f, "start address"),
            Side::End => write!(f, "end address"),
            Side::Only => write!(f, "address"),
            Side::Network => write!(f, "network address"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("cannot parse {side} '{token}': {reason}")]
    InvalidAddress {
        side: Side,
        token: String,
        reason: String,
    },
    #[error("found no addresses")]
    NoAddressFound,
    #[error("found more than two addresses ({count})")]
    TooManyAddresses { count: usize },
    #[error("start and end addresses must be of the same IP version")]
    VersionMismatch,
    #[error("inconsistent zone identifiers: start has {start}, end has {end}")]
    InconsistentZone { start: String, end: String },
    #[error("zone identifier '%{zone}' is only supported for IPv6 addresses")]
    ZoneNotSupported { zone: String },
    #[error("'{prefix}' is not a valid prefix length (0-{max})")]
    InvalidPrefix { prefix: String, max: u8 },
}

impl RangeError {
    /// Describe an optional zone for [`RangeError::InconsistentZone`].
    pub(crate) fn describe_zone(zone: Option<&str>) -> String {
        match zone {
            Some(z) => format!("'%{z}'"),
            None => "no zone".to_string(),
        }
    }
}

/// All errors found in one expression, in detection order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics(Vec<RangeError>);

impl Diagnostics {
    pub fn new(errors: Vec<RangeError>) -> Option<Diagnostics> {
        if errors.is_empty() {
            None
        } else {
            Some(Diagnostics(errors))
        }
    }

    pub fn errors(&self) -> &[RangeError] {
        &self.0
    }

    /// The first error detected, used by tests and the trace output.
    pub fn first(&self) -> &RangeError {
        &self.0[0]
    }
}

impl From<RangeError> for Diagnostics {
    fn from(err: RangeError) -> Self {
        Diagnostics(vec![err])
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("; "))
    }
}

impl std::error::Error for Diagnostics {}

/// A failed expression, ready to be printed as a single error line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {form} '{expression}': {diagnostics}")]
pub struct ExpressionError {
    pub form: Form,
    pub expression: String,
    pub diagnostics: Diagnostics,
}
