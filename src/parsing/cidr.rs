//! Parser for `ADDR[%ZONE]/PREFIX` network expressions.

use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

use super::bare::parse_address;
use super::zone::check_not_empty;
use crate::error::{Diagnostics, RangeError, Side};
use crate::models::CidrSpec;

lazy_static! {
    // The zone runs up to the last '/', so it may itself contain '/'.
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^%]*?)(?:%(?P<zone>.*))?/(?P<prefix>[^/]*)$")
            .expect("Invalid Regex?");
}

/// Parse a network expression. Host bits are allowed and cleared.
pub fn parse_cidr(expr: &str) -> Result<CidrSpec, Diagnostics> {
    let caps = CIDR_RE.captures(expr).ok_or_else(|| RangeError::InvalidAddress {
        side: Side::Network,
        token: expr.to_string(),
        reason: "missing prefix length".to_string(),
    })?;
    let addr_text = caps.name("addr").map_or("", |m| m.as_str());
    let zone = caps.name("zone").map(|m| m.as_str());
    let prefix_text = caps.name("prefix").map_or("", |m| m.as_str());
    log::trace!(
        "cidr {} addr={addr_text:?} zone={zone:?} prefix={prefix_text:?}",
        expr.on_blue()
    );

    let token = match zone {
        Some(z) => format!("{addr_text}%{z}"),
        None => addr_text.to_string(),
    };
    if let Some(z) = zone {
        check_not_empty(z, &token, Side::Network)?;
    }
    let addr = parse_address(addr_text, &token, Side::Network)?;
    let prefix_len = parse_prefix(prefix_text, addr.version().bits())?;
    let net = CidrSpec::new(addr, prefix_len, zone.map(str::to_string))?;
    log::debug!("cidr {} -> {} to {}", expr.on_blue(), net, net.last());
    Ok(net)
}

/// A prefix length is a plain decimal number no larger than `max`.
fn parse_prefix(text: &str, max: u8) -> Result<u8, RangeError> {
    let invalid = || RangeError::InvalidPrefix {
        prefix: text.to_string(),
        max,
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u8>() {
        Ok(len) if len <= max => Ok(len),
        _ => Err(invalid()),
    }
}
