//! Tokenizer for bare `START SEP END` range expressions.
//!
//! A separator is, tried in this order at each position:
//!
//! 1. one or more whitespace characters, optionally followed by `to` and one
//!    whitespace character,
//! 2. two or more periods, optionally preceded and/or followed by a comma,
//! 3. one or more dashes, optionally followed by `>`,
//! 4. exactly one of `,` `;` `→` `⇒` `—` `…`.
//!
//! Any separator swallows surrounding whitespace. When whitespace precedes one
//! of the forms 2-4, the whitespace belongs to that separator, so `a - b` has a
//! single separator ` - `. Separators are matched leftmost first and never
//! overlap; empty fragments between adjacent separators are dropped.

/// Single-character separators (form 4).
const SINGLE_SEPARATORS: [char; 6] = [',', ';', '→', '⇒', '—', '…'];

/// Split a bare range expression into its non-empty address tokens.
pub fn split_range(expr: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut fragment_start = 0;
    let mut pos = 0;
    while pos < expr.len() {
        match separator_at(expr, pos) {
            Some(end) => {
                if fragment_start < pos {
                    tokens.push(&expr[fragment_start..pos]);
                }
                fragment_start = end;
                pos = end;
            }
            None => pos += char_len_at(expr, pos),
        }
    }
    if fragment_start < expr.len() {
        tokens.push(&expr[fragment_start..]);
    }
    tokens
}

/// Byte offset just past a separator starting at byte `pos`, if there is one.
pub fn separator_at(s: &str, pos: usize) -> Option<usize> {
    let after_ws = skip_whitespace(s, pos);
    // forms 2-4 take precedence and absorb any leading whitespace
    if let Some(end) = symbol_separator_at(s, after_ws) {
        return Some(skip_whitespace(s, end));
    }
    if after_ws == pos {
        return None;
    }
    let mut end = after_ws;
    if let Some(rest) = s[end..].strip_prefix("to") {
        if let Some(c) = rest.chars().next().filter(|c| c.is_whitespace()) {
            end += "to".len() + c.len_utf8();
        }
    }
    Some(skip_whitespace(s, end))
}

/// Match forms 2-4 at exactly `pos`, without surrounding whitespace.
fn symbol_separator_at(s: &str, pos: usize) -> Option<usize> {
    let rest = &s[pos..];
    let first = rest.chars().next()?;

    // ,?\.{2,},?
    let dots_from = if first == ',' { 1 } else { 0 };
    let dots = count_leading(&rest[dots_from..], '.');
    if dots >= 2 {
        let mut end = pos + dots_from + dots;
        if s[end..].starts_with(',') {
            end += 1;
        }
        return Some(end);
    }

    // -+>?
    let dashes = count_leading(rest, '-');
    if dashes > 0 {
        let mut end = pos + dashes;
        if s[end..].starts_with('>') {
            end += 1;
        }
        return Some(end);
    }

    SINGLE_SEPARATORS
        .contains(&first)
        .then_some(pos + first.len_utf8())
}

fn count_leading(s: &str, c: char) -> usize {
    s.bytes().take_while(|&b| b == c as u8).count()
}

fn skip_whitespace(s: &str, pos: usize) -> usize {
    s[pos..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(s.len(), |(i, _)| pos + i)
}

fn char_len_at(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(split_range("10.0.0.1 10.0.0.5"), vec!["10.0.0.1", "10.0.0.5"]);
        assert_eq!(split_range("10.0.0.1\t \t10.0.0.5"), vec!["10.0.0.1", "10.0.0.5"]);
    }

    #[test]
    fn test_to_keyword() {
        assert_eq!(split_range("10.0.0.1 to 10.0.0.5"), vec!["10.0.0.1", "10.0.0.5"]);
        assert_eq!(split_range("10.0.0.1   to\t10.0.0.5"), vec!["10.0.0.1", "10.0.0.5"]);
        // "to" must be followed by whitespace to be part of the separator
        assert_eq!(split_range("a tob"), vec!["a", "tob"]);
        // without leading whitespace "to" is just text
        assert_eq!(split_range("ato b"), vec!["ato", "b"]);
    }

    #[test]
    fn test_periods() {
        assert_eq!(split_range("192.0.2.1..192.0.2.9"), vec!["192.0.2.1", "192.0.2.9"]);
        assert_eq!(split_range("192.0.2.1...192.0.2.9"), vec!["192.0.2.1", "192.0.2.9"]);
        assert_eq!(split_range("::1,..,::2"), vec!["::1", "::2"]);
        assert_eq!(split_range("::1 ,.. ::2"), vec!["::1", "::2"]);
        // a single period is part of an address
        assert_eq!(split_range("192.0.2.1"), vec!["192.0.2.1"]);
    }

    #[test]
    fn test_dashes_and_arrows() {
        assert_eq!(split_range("2001:db8::a - 2001:db8::b"), vec!["2001:db8::a", "2001:db8::b"]);
        assert_eq!(split_range("::1--::2"), vec!["::1", "::2"]);
        assert_eq!(split_range("::1 -> ::2"), vec!["::1", "::2"]);
        assert_eq!(split_range("::1--->::2"), vec!["::1", "::2"]);
    }

    #[test]
    fn test_single_symbols() {
        for expr in [
            "::1,::2", "::1;::2", "::1→::2", "::1⇒::2", "::1—::2", "::1…::2", "::1 , ::2",
            "::1 → ::2",
        ] {
            assert_eq!(split_range(expr), vec!["::1", "::2"], "expr={expr}");
        }
    }

    #[test]
    fn test_adjacent_separators_drop_empty_fragments() {
        assert_eq!(split_range("::1,;::2"), vec!["::1", "::2"]);
        assert_eq!(split_range(",::1;"), vec!["::1"]);
        assert_eq!(split_range(",;,"), Vec::<&str>::new());
        assert_eq!(split_range(""), Vec::<&str>::new());
    }

    #[test]
    fn test_more_than_two_tokens() {
        assert_eq!(split_range("::1 ::2 ::3"), vec!["::1", "::2", "::3"]);
    }

    #[test]
    fn test_zone_with_separator_characters_is_split() {
        assert_eq!(
            split_range("fe80::a%eth0-fe80::b%eth0"),
            vec!["fe80::a%eth0", "fe80::b%eth0"]
        );
    }

    #[test]
    fn test_separator_at() {
        assert_eq!(separator_at("a  to  b", 1), Some(7));
        assert_eq!(separator_at("a - b", 1), Some(4));
        assert_eq!(separator_at("a.b", 1), None);
        assert_eq!(separator_at("a…b", 1), Some(1 + '…'.len_utf8()));
        assert_eq!(separator_at("ab", 1), None);
    }
}
