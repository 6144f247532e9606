//! Networks in CIDR notation.

use std::fmt;

use super::address::{last_address, network_base, Address, Version};
use super::range::AddressIter;
use crate::error::RangeError;

/// A network given as base address and prefix length, with an optional
/// IPv6 zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrSpec {
    network: Address,
    prefix_len: u8,
    zone: Option<String>,
}

impl CidrSpec {
    /// Create a network. Host bits of `addr` are cleared, so `10.1.2.3/8`
    /// is accepted and means `10.0.0.0/8`.
    pub fn new(addr: Address, prefix_len: u8, zone: Option<String>) -> Result<Self, RangeError> {
        if let Some(zone) = zone.as_ref() {
            if addr.version() == Version::V4 {
                return Err(RangeError::ZoneNotSupported { zone: zone.clone() });
            }
        }
        let network = network_base(addr, prefix_len)?;
        if network != addr {
            log::debug!("normalized {addr}/{prefix_len} to network {network}/{prefix_len}");
        }
        Ok(CidrSpec {
            network,
            prefix_len,
            zone,
        })
    }

    pub fn network(&self) -> Address {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn version(&self) -> Version {
        self.network.version()
    }

    /// Highest address in the block (the IPv4 broadcast address).
    pub fn last(&self) -> Address {
        // prefix_len was validated in new()
        last_address(self.network, self.prefix_len).unwrap_or(self.network)
    }

    /// Number of addresses in the block, `None` for an IPv6 `/0`.
    pub fn size(&self) -> Option<u128> {
        let host_bits = (self.version().bits() - self.prefix_len) as u32;
        1u128.checked_shl(host_bits)
    }

    /// Lazily produce the addresses of the block.
    ///
    /// With `hosts_only`, IPv4 blocks larger than two addresses drop the
    /// network and broadcast address, and IPv6 blocks larger than one
    /// address drop the Subnet-Router anycast address (the first one).
    pub fn addresses(&self, hosts_only: bool) -> AddressIter {
        let mut first = self.network;
        let mut last = self.last();
        if hosts_only {
            match self.version() {
                Version::V4 if self.prefix_len <= 30 => {
                    first = first.checked_succ().unwrap_or(first);
                    last = last.checked_pred().unwrap_or(last);
                }
                Version::V6 if self.prefix_len < 128 => {
                    first = first.checked_succ().unwrap_or(first);
                }
                _ => {}
            }
        }
        AddressIter::new(first, last)
    }
}

impl fmt::Display for CidrSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{}/{}", self.network, zone, self.prefix_len),
            None => write!(f, "{}/{}", self.network, self.prefix_len),
        }
    }
}
