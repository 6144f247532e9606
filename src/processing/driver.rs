//! Batch driver: parse each expression, stream its addresses, report errors.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Options;
use crate::output::{format_error, write_address};
use crate::parsing::parse_expression;

/// Outcome of a whole batch of expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStatus {
    /// Number of expressions processed.
    pub expressions: usize,
    /// Set once any expression failed to parse.
    pub any_failed: bool,
}

impl BatchStatus {
    pub fn success(&self) -> bool {
        !self.any_failed
    }

    /// Process exit code: 0 when every expression succeeded, else 1.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.any_failed)
    }
}

/// Process expressions strictly in input order.
///
/// Addresses go to `out`, one per line; a failed expression yields one line
/// on `err` and processing continues. I/O errors on input or output stop the
/// batch.
///
/// # Arguments
/// * `inputs` - expressions, e.g. CLI arguments or lines of stdin
/// * `options` - run options
/// * `out` - destination for addresses
/// * `err` - destination for error lines
pub fn run<I, W, E>(
    inputs: I,
    options: &Options,
    out: &mut W,
    err: &mut E,
) -> io::Result<BatchStatus>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
    E: Write,
{
    let mut status = BatchStatus::default();
    for input in inputs {
        let input = input?;
        status.expressions += 1;
        if !process_expression(&input, options, out, err)? {
            status.any_failed = true;
        }
    }
    out.flush()?;
    log::info!(
        "processed {} expressions, {}",
        status.expressions,
        if status.any_failed {
            "with failures".red()
        } else {
            "all ok".green()
        }
    );
    Ok(status)
}

/// Parse and enumerate one expression. Returns `false` if it failed to parse.
pub fn process_expression<W, E>(
    expr: &str,
    options: &Options,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool>
where
    W: Write,
    E: Write,
{
    match parse_expression(expr) {
        Ok(parsed) => {
            let zone = parsed.zone();
            let mut count: u128 = 0;
            for addr in parsed.addresses(options.hosts_only) {
                write_address(out, addr, zone)?;
                count += 1;
            }
            log::debug!("'{}' produced {count} addresses", expr.trim());
            Ok(true)
        }
        Err(e) => {
            log::debug!("'{}' failed: {}", expr.trim(), e.diagnostics.first());
            writeln!(err, "{}", format_error(&e))?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_strs(inputs: &[&str], options: Options) -> (Vec<String>, Vec<String>, BatchStatus) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(
            inputs.iter().map(|s| Ok(s.to_string())),
            &options,
            &mut out,
            &mut err,
        )
        .unwrap();
        let lines = |buf: Vec<u8>| {
            String::from_utf8(buf)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        (lines(out), lines(err), status)
    }

    #[test]
    fn test_success() {
        let (out, err, status) = run_strs(&["192.0.2.16/30", "::1 - ::2"], Options::default());
        assert_eq!(
            out,
            vec!["192.0.2.16", "192.0.2.17", "192.0.2.18", "192.0.2.19", "::1", "::2"]
        );
        assert!(err.is_empty());
        assert!(status.success());
        assert_eq!(status.expressions, 2);
        assert_eq!(status.exit_code(), 0);
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let (out, err, status) = run_strs(&["foo", "10.0.0.1", "", "10.0.0.2"], Options::default());
        assert_eq!(out, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(err.len(), 2);
        assert_eq!(
            err[0],
            "ipenum: ERROR: cannot parse range 'foo': cannot parse address 'foo': invalid IP address syntax"
        );
        assert_eq!(err[1], "ipenum: ERROR: cannot parse range '': found no addresses");
        assert!(!status.success());
        assert_eq!(status.exit_code(), 1);
    }

    #[test]
    fn test_empty_range_is_success() {
        let (out, err, status) = run_strs(&["192.0.2.1..192.0.2.0"], Options::default());
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert!(status.success());
    }

    #[test]
    fn test_hosts_only_option() {
        let options = Options {
            hosts_only: true,
            ..Options::default()
        };
        let (out, _, _) = run_strs(&["192.0.2.16/30"], options);
        assert_eq!(out, vec!["192.0.2.17", "192.0.2.18"]);
    }

    #[test]
    fn test_input_error_stops_batch() {
        let inputs = vec![
            Ok("10.0.0.1".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
            Ok("10.0.0.2".to_string()),
        ];
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(inputs, &Options::default(), &mut out, &mut err);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.1\n");
    }
}
