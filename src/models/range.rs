//! Inclusive address ranges and their lazy enumeration.

use std::iter::FusedIterator;

use super::address::{Address, Version};
use crate::error::RangeError;

/// An inclusive range of addresses sharing one version and zone.
///
/// `start > end` is a valid, empty range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    start: Address,
    end: Address,
    zone: Option<String>,
}

impl AddressRange {
    /// Build a range, checking that both ends share a version and that a
    /// zone is only attached to IPv6 addresses.
    pub fn new(start: Address, end: Address, zone: Option<String>) -> Result<Self, RangeError> {
        if start.version() != end.version() {
            return Err(RangeError::VersionMismatch);
        }
        if let Some(zone) = zone.as_ref() {
            if start.version() == Version::V4 {
                return Err(RangeError::ZoneNotSupported { zone: zone.clone() });
            }
        }
        Ok(AddressRange { start, end, zone })
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn version(&self) -> Version {
        self.start.version()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Move the start up by one address. Past the top of the address space
    /// the range collapses to empty instead of wrapping.
    pub fn exclude_start(mut self) -> Self {
        match self.start.checked_succ() {
            Some(next) => self.start = next,
            None => {
                // start is the maximum, so the range can only be empty
                if let Some(below) = self.start.checked_pred() {
                    self.end = below;
                }
            }
        }
        self
    }

    /// Move the end down by one address. Below address zero the range
    /// collapses to empty instead of wrapping.
    pub fn exclude_end(mut self) -> Self {
        match self.end.checked_pred() {
            Some(prev) => self.end = prev,
            None => {
                if let Some(above) = self.end.checked_succ() {
                    self.start = above;
                }
            }
        }
        self
    }

    /// Lazily produce every address from start to end inclusive.
    pub fn addresses(&self) -> AddressIter {
        AddressIter::new(self.start, self.end)
    }
}

/// Single-pass ascending iterator over an inclusive address span.
///
/// Holds only the next value and the end, whatever the size of the span.
#[derive(Debug, Clone)]
pub struct AddressIter {
    version: Version,
    next: Option<u128>,
    end: u128,
}

impl AddressIter {
    /// Iterate from `start` to `end` inclusive; empty if `start > end`.
    ///
    /// Both ends must have the same version; a mismatch yields an empty
    /// iterator.
    pub fn new(start: Address, end: Address) -> AddressIter {
        let next = (start <= end).then_some(start.value());
        AddressIter {
            version: start.version(),
            next,
            end: end.value(),
        }
    }

    /// Number of addresses not yet produced, `None` when it does not fit in
    /// a `u128` (all 2^128 IPv6 addresses).
    pub fn remaining(&self) -> Option<u128> {
        match self.next {
            Some(next) => (self.end - next).checked_add(1),
            None => Some(0),
        }
    }
}

impl Iterator for AddressIter {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current + 1)
        } else {
            None
        };
        Address::new(self.version, current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AddressIter {}
