//! Parser for bare `START SEP END` and single-address expressions.

use colored::Colorize;

use super::separator::split_range;
use super::zone::common_zone;
use crate::error::{Diagnostics, RangeError, Side};
use crate::models::{Address, AddressRange};

/// Parse a bare range expression into an inclusive [`AddressRange`].
///
/// A single address is a range from itself to itself. Errors on both
/// addresses are reported together.
pub fn parse_bare_range(expr: &str) -> Result<AddressRange, Diagnostics> {
    let tokens = split_range(expr);
    log::trace!("split {} into {:?}", expr.on_blue(), tokens);

    let (start, end, single) = match tokens.as_slice() {
        [] => return Err(RangeError::NoAddressFound.into()),
        [only] => (*only, *only, true),
        [start, end] => (*start, *end, false),
        _ => {
            return Err(RangeError::TooManyAddresses {
                count: tokens.len(),
            }
            .into())
        }
    };

    let (start_text, end_text, zone) = common_zone(start, end)?;

    let (start_side, end_side) = if single {
        (Side::Only, Side::Only)
    } else {
        (Side::Start, Side::End)
    };
    let start_addr = parse_address(start_text, start, start_side);
    let end_addr = if single {
        start_addr.clone()
    } else {
        parse_address(end_text, end, end_side)
    };

    match (start_addr, end_addr) {
        (Ok(start_addr), Ok(end_addr)) => {
            let range = AddressRange::new(start_addr, end_addr, zone.map(str::to_string))?;
            log::debug!(
                "range {} -> {}..{}{}",
                expr.on_blue(),
                range.start(),
                range.end(),
                zone.map(|z| format!(" zone %{z}")).unwrap_or_default()
            );
            Ok(range)
        }
        (start_res, end_res) => {
            let mut errors = vec![];
            errors.extend(start_res.err());
            if !single {
                errors.extend(end_res.err());
            }
            Err(Diagnostics::new(errors).unwrap_or_else(|| RangeError::NoAddressFound.into()))
        }
    }
}

/// Parse one address token (zone already removed), naming the side on error.
pub fn parse_address(text: &str, token: &str, side: Side) -> Result<Address, RangeError> {
    text.parse::<Address>()
        .map_err(|e| RangeError::InvalidAddress {
            side,
            token: token.to_string(),
            reason: e.to_string(),
        })
}
