//! Line formatting for standard output and standard error.

use std::io::{self, Write};

use crate::models::Address;

/// Program name used as error line prefix.
pub const PROG: &str = "ipenum";

/// Write one address line, with its zone suffix appended when present.
pub fn write_address<W: Write>(out: &mut W, addr: Address, zone: Option<&str>) -> io::Result<()> {
    match zone {
        Some(zone) => writeln!(out, "{addr}%{zone}"),
        None => writeln!(out, "{addr}"),
    }
}

/// Format an error line as `ipenum: ERROR: <message>`.
pub fn format_error<T: ToString>(message: T) -> String {
    format!("{PROG}: ERROR: {}", message.to_string())
}
