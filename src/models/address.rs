//! Versioned IP address values and prefix arithmetic.
//!
//! An [`Address`] is an unsigned integer tagged with its IP [`Version`]. Both
//! versions are stored as `u128` so one code path serves 32-bit and 128-bit
//! arithmetic; the version bounds the value.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V4,
    V6,
}

impl Version {
    /// Number of bits in an address of this version.
    pub const fn bits(self) -> u8 {
        match self {
            Version::V4 => 32,
            Version::V6 => 128,
        }
    }

    /// Largest address value of this version.
    pub const fn max_value(self) -> u128 {
        match self {
            Version::V4 => u32::MAX as u128,
            Version::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Version::V4 => write!(f, "IPv4"),
            Version::V6 => write!(f, "IPv6"),
        }
    }
}

/// One IPv4 or IPv6 address.
///
/// Comparison is only defined between addresses of the same version:
/// `partial_cmp` returns `None` across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    version: Version,
    value: u128,
}

impl Address {
    /// Build an address from a raw value, `None` if it does not fit the version.
    pub fn new(version: Version, value: u128) -> Option<Address> {
        (value <= version.max_value()).then_some(Address { version, value })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// The next address, or `None` at the top of the address space.
    pub fn checked_succ(self) -> Option<Address> {
        self.value
            .checked_add(1)
            .and_then(|v| Address::new(self.version, v))
    }

    /// The previous address, or `None` at address zero.
    pub fn checked_pred(self) -> Option<Address> {
        self.value.checked_sub(1).map(|value| Address {
            version: self.version,
            value,
        })
    }

    pub fn is_max(&self) -> bool {
        self.value == self.version.max_value()
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        if self.version == other.version {
            Some(self.value.cmp(&other.value))
        } else {
            None
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address {
                version: Version::V4,
                value: u32::from(v4) as u128,
            },
            IpAddr::V6(v6) => Address {
                version: Version::V6,
                value: u128::from(v6),
            },
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr.version {
            Version::V4 => IpAddr::V4(Ipv4Addr::from(addr.value as u32)),
            Version::V6 => IpAddr::V6(Ipv6Addr::from(addr.value)),
        }
    }
}

impl FromStr for Address {
    type Err = std::net::AddrParseError;

    /// Parse a dotted-quad IPv4 or an IPv6 literal. Zone suffixes must be
    /// stripped beforehand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>().map(Address::from)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

/// Convert a prefix length to a netmask for the given version.
///
/// # Examples
/// ```
/// use ipenum::models::{prefix_mask, Version};
/// assert_eq!(prefix_mask(Version::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(version: Version, len: u8) -> Result<u128, RangeError> {
    check_prefix(version, len)?;
    let right_len = (version.bits() - len) as u32;
    let all_bits = version.max_value();
    // shifting a u128 by 128 is an overflow, a /0 mask is simply empty
    let mask = all_bits
        .checked_shr(right_len)
        .and_then(|bits| bits.checked_shl(right_len))
        .unwrap_or(0);
    Ok(mask)
}

/// Get the network base for an address and prefix length.
pub fn network_base(addr: Address, len: u8) -> Result<Address, RangeError> {
    let mask = prefix_mask(addr.version, len)?;
    Ok(Address {
        version: addr.version,
        value: addr.value & mask,
    })
}

/// Get the last address of the block an address belongs to. For IPv4 this
/// is the subnet directed broadcast address.
pub fn last_address(addr: Address, len: u8) -> Result<Address, RangeError> {
    let mask = prefix_mask(addr.version, len)?;
    Ok(Address {
        version: addr.version,
        value: (addr.value & mask) | (!mask & addr.version.max_value()),
    })
}

fn check_prefix(version: Version, len: u8) -> Result<(), RangeError> {
    if len > version.bits() {
        Err(RangeError::InvalidPrefix {
            prefix: len.to_string(),
            max: version.bits(),
        })
    } else {
        Ok(())
    }
}
