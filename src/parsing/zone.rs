//! IPv6 zone identifier (`%eth0`) handling.
//!
//! The identifier is opaque: everything after the first `%` of a token. It is
//! not checked against the interfaces of this host.

use crate::error::{RangeError, Side};

/// Split a token into address text and zone identifier (without the `%`).
pub fn split_zone(token: &str) -> (&str, Option<&str>) {
    match token.split_once('%') {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (token, None),
    }
}

/// Split both tokens of a range and lift their common zone to the range.
///
/// A zone on only one side, or different zones, is an error.
pub fn common_zone<'a>(
    start: &'a str,
    end: &'a str,
) -> Result<(&'a str, &'a str, Option<&'a str>), RangeError> {
    let (start_addr, start_zone) = split_zone(start);
    let (end_addr, end_zone) = split_zone(end);
    if start_zone != end_zone {
        return Err(RangeError::InconsistentZone {
            start: RangeError::describe_zone(start_zone),
            end: RangeError::describe_zone(end_zone),
        });
    }
    if let Some(zone) = start_zone {
        check_not_empty(zone, start, if start == end { Side::Only } else { Side::Start })?;
        log::trace!("zone '%{zone}' lifted from '{start}' and '{end}'");
    }
    Ok((start_addr, end_addr, start_zone))
}

/// A `%` must be followed by an identifier.
pub fn check_not_empty(zone: &str, token: &str, side: Side) -> Result<(), RangeError> {
    if zone.is_empty() {
        Err(RangeError::InvalidAddress {
            side,
            token: token.to_string(),
            reason: "empty zone identifier".to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_zone() {
        assert_eq!(split_zone("fe80::1%eth0"), ("fe80::1", Some("eth0")));
        assert_eq!(split_zone("fe80::1"), ("fe80::1", None));
        assert_eq!(split_zone("fe80::1%a%b:c"), ("fe80::1", Some("a%b:c")));
        assert_eq!(split_zone("fe80::1%"), ("fe80::1", Some("")));
    }

    #[test]
    fn test_common_zone() {
        assert_eq!(
            common_zone("fe80::a%eth0", "fe80::b%eth0"),
            Ok(("fe80::a", "fe80::b", Some("eth0")))
        );
        assert_eq!(common_zone("::1", "::2"), Ok(("::1", "::2", None)));
    }

    #[test]
    fn test_zone_on_one_side_only() {
        assert_eq!(
            common_zone("fe80::a%eth0", "fe80::b"),
            Err(RangeError::InconsistentZone {
                start: "'%eth0'".to_string(),
                end: "no zone".to_string(),
            })
        );
        assert!(matches!(
            common_zone("fe80::a", "fe80::b%eth0"),
            Err(RangeError::InconsistentZone { .. })
        ));
    }

    #[test]
    fn test_different_zones() {
        assert!(matches!(
            common_zone("fe80::a%eth0", "fe80::b%eth1"),
            Err(RangeError::InconsistentZone { .. })
        ));
        // zones are compared byte for byte
        assert!(matches!(
            common_zone("fe80::a%eth0", "fe80::b%ETH0"),
            Err(RangeError::InconsistentZone { .. })
        ));
    }

    #[test]
    fn test_empty_zone_rejected() {
        assert!(matches!(
            common_zone("fe80::a%", "fe80::b%"),
            Err(RangeError::InvalidAddress { side: Side::Start, .. })
        ));
    }
}
