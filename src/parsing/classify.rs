//! Route an expression to the parser for its surface form.

use std::fmt;

/// Surface form of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `ADDR[%ZONE]/PREFIX`
    Cidr,
    /// Bracket-delimited ISO 31-11 interval.
    Interval,
    /// `ADDR SEP ADDR` or a single address.
    Bare,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Cidr => write!(f, "CIDR"),
            Form::Interval => write!(f, "interval"),
            Form::Bare => write!(f, "range"),
        }
    }
}

/// Classify a trimmed expression. A `/` always means CIDR, even inside
/// brackets.
pub fn classify(expr: &str) -> Form {
    if expr.contains('/') {
        return Form::Cidr;
    }
    let mut chars = expr.chars();
    match (chars.next(), chars.next_back()) {
        (Some('[' | ']' | '('), Some('[' | ']' | ')')) => Form::Interval,
        _ => Form::Bare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("192.0.2.16/29"), Form::Cidr);
        assert_eq!(classify("fe80::%eth0/64"), Form::Cidr);
        assert_eq!(classify("[192.0.2.0/24]"), Form::Cidr);
        assert_eq!(classify("(::1,::2]"), Form::Interval);
        assert_eq!(classify("]::1,::2["), Form::Interval);
        assert_eq!(classify("[]"), Form::Interval);
        assert_eq!(classify("::1 - ::2"), Form::Bare);
        assert_eq!(classify("[::1"), Form::Bare);
        assert_eq!(classify("::1)"), Form::Bare);
        assert_eq!(classify(")::1,::2("), Form::Bare);
    }

    #[test]
    fn test_single_bracket_is_bare() {
        assert_eq!(classify("["), Form::Bare);
        assert_eq!(classify("]"), Form::Bare);
        assert_eq!(classify(""), Form::Bare);
    }
}
