//! ISO 31-11 interval notation: `[a,b]`, `(a,b]`, `[a,b)`, `(a,b)` and the
//! reversed-bracket forms `]a,b]`, `[a,b[`, `]a,b[`.

use colored::Colorize;

use super::bare::parse_bare_range;
use crate::error::Diagnostics;
use crate::models::AddressRange;

/// Whether an interval bound belongs to the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Inclusive,
    Exclusive,
}

impl Bound {
    /// Interpret an opening delimiter: `[` includes, `(` and `]` exclude.
    pub fn opening(c: char) -> Option<Bound> {
        match c {
            '[' => Some(Bound::Inclusive),
            '(' | ']' => Some(Bound::Exclusive),
            _ => None,
        }
    }

    /// Interpret a closing delimiter: `]` includes, `)` and `[` exclude.
    pub fn closing(c: char) -> Option<Bound> {
        match c {
            ']' => Some(Bound::Inclusive),
            ')' | '[' => Some(Bound::Exclusive),
            _ => None,
        }
    }
}

/// Split an interval into its opening bound, interior text and closing bound.
///
/// `None` if `expr` is not delimited like an interval.
pub fn split_interval(expr: &str) -> Option<(Bound, &str, Bound)> {
    let mut chars = expr.chars();
    let open = chars.next().and_then(Bound::opening)?;
    let close = chars.next_back().and_then(Bound::closing)?;
    Some((open, chars.as_str().trim(), close))
}

/// Parse an interval into the inclusive range it denotes.
///
/// An interval that collapses to nothing, e.g. `(a,a]`, is an empty range.
pub fn parse_interval(expr: &str) -> Result<AddressRange, Diagnostics> {
    let Some((open, interior, close)) = split_interval(expr) else {
        // the classifier only routes delimited expressions here
        return parse_bare_range(expr);
    };
    let range = parse_bare_range(interior)?;
    let adjusted = adjust(range, open, close);
    log::debug!(
        "interval {} ({:?}, {:?}) -> {}..{}",
        expr.on_blue(),
        open,
        close,
        adjusted.start(),
        adjusted.end()
    );
    Ok(adjusted)
}

/// Turn exclusive bounds into inclusive ones.
pub fn adjust(range: AddressRange, open: Bound, close: Bound) -> AddressRange {
    let range = match open {
        Bound::Inclusive => range,
        Bound::Exclusive => range.exclude_start(),
    };
    match close {
        Bound::Inclusive => range,
        Bound::Exclusive => range.exclude_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    fn addrs(expr: &str) -> Vec<String> {
        parse_interval(expr)
            .unwrap()
            .addresses()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_split_interval() {
        assert_eq!(
            split_interval("( ::1, ::2 ]"),
            Some((Bound::Exclusive, "::1, ::2", Bound::Inclusive))
        );
        assert_eq!(split_interval("::1,::2"), None);
        assert_eq!(split_interval("[::1,::2"), None);
    }

    #[test]
    fn test_open_start() {
        assert_eq!(addrs("(2001:db8::a,2001:db8::c]"), vec!["2001:db8::b", "2001:db8::c"]);
    }

    #[test]
    fn test_all_bracket_forms() {
        assert_eq!(addrs("[10.0.0.1,10.0.0.4]"), addrs_bare("10.0.0.1..10.0.0.4"));
        assert_eq!(addrs("(10.0.0.1,10.0.0.4]"), addrs_bare("10.0.0.2..10.0.0.4"));
        assert_eq!(addrs("[10.0.0.1,10.0.0.4)"), addrs_bare("10.0.0.1..10.0.0.3"));
        assert_eq!(addrs("(10.0.0.1,10.0.0.4)"), addrs_bare("10.0.0.2..10.0.0.3"));
        assert_eq!(addrs("]10.0.0.1,10.0.0.4]"), addrs("(10.0.0.1,10.0.0.4]"));
        assert_eq!(addrs("[10.0.0.1,10.0.0.4["), addrs("[10.0.0.1,10.0.0.4)"));
        assert_eq!(addrs("]10.0.0.1,10.0.0.4["), addrs("(10.0.0.1,10.0.0.4)"));
    }

    fn addrs_bare(expr: &str) -> Vec<String> {
        parse_bare_range(expr)
            .unwrap()
            .addresses()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_collapse_is_empty() {
        assert!(addrs("(10.0.0.1,10.0.0.1]").is_empty());
        assert!(addrs("(10.0.0.1,10.0.0.2)").is_empty());
        assert!(addrs("(255.255.255.255,255.255.255.255]").is_empty());
        assert!(addrs("[::,::)").is_empty());
    }

    #[test]
    fn test_interior_whitespace_and_separators() {
        assert_eq!(addrs("[ 10.0.0.1 - 10.0.0.2 ]"), vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(addrs("[10.0.0.1 10.0.0.2]"), vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_zone_kept() {
        let r = parse_interval("(fe80::1%eth0, fe80::3%eth0)").unwrap();
        assert_eq!(r.zone(), Some("eth0"));
        assert_eq!(r.addresses().map(|a| a.to_string()).collect::<Vec<_>>(), vec!["fe80::2"]);
    }

    #[test]
    fn test_errors_come_from_interior() {
        assert_eq!(parse_interval("[]").unwrap_err().first(), &RangeError::NoAddressFound);
        assert!(matches!(
            parse_interval("[fe80::1%eth0, fe80::3]").unwrap_err().first(),
            RangeError::InconsistentZone { .. }
        ));
    }
}
