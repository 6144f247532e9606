//! Command line definition.

use clap::Parser;

const VERSION_TEXT: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

const EPILOG: &str = "\
IPv4 and IPv6 ranges can be specified as positional command line
arguments.  Without positional command line arguments, ranges are read
from standard input, one range per line.

Ranges are given in CIDR format (ADDR[%ZONE]/PREFIX), as start and end
addresses, or in ISO 31-11 interval notation.  Start and end addresses
are separated with Tab or Space characters (optionally with \"to\"), two
or more Period characters, one or more Dash characters (optionally
followed by '>'), or one of , ; \u{2192} \u{21d2} \u{2014} \u{2026}.

Intervals are written as [a,b], (a,b], [a,b), (a,b), or with reversed
brackets ]a,b], [a,b[, ]a,b[.  A parenthesis or reversed bracket
excludes that end address.

An IPv6 zone identifier (%eth0) must be identical on both addresses of
a range and is printed after every address.

An address range where the start address is greater than the end address
is valid and interpreted as an empty range.  A single IP address is
treated as an address range with identical start and end addresses.

By default, every IP address inside a CIDR range is printed, including
the network number and subnet directed broadcast address for IPv4,
and the Subnet-Router anycast address for IPv6.";

/// Enumerate and print addresses of IP ranges, one address per line.
#[derive(Parser, Debug, Default)]
#[command(name = "ipenum", version = VERSION_TEXT, about, after_help = EPILOG)]
pub struct Args {
    /// Print only host addresses (affects CIDR only)
    #[arg(short = 'H', long)]
    pub hosts_only: bool,

    /// Trace intermediate parse steps on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// IPv4 or IPv6 address range
    #[arg(value_name = "RANGE")]
    pub ranges: Vec<String>,
}
