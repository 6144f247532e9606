//! Run options shared by the driver and the logger setup.

use crate::cli::Args;

/// Settings for one run, passed explicitly to the components that need them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Restrict CIDR enumeration to host addresses.
    pub hosts_only: bool,
    /// Trace intermediate parse steps on stderr.
    pub verbose: bool,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Options {
            hosts_only: args.hosts_only,
            verbose: args.verbose,
        }
    }
}
