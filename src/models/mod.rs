//! Address domain models.
//!
//! - [`Address`] and [`Version`] - one IPv4 or IPv6 address as an integer
//! - [`AddressRange`] and [`AddressIter`] - inclusive ranges and their lazy enumeration
//! - [`CidrSpec`] - networks in CIDR notation

mod address;
mod cidr;
mod range;

// Re-export public types
pub use address::{last_address, network_base, prefix_mask, Address, Version};
pub use cidr::CidrSpec;
pub use range::{AddressIter, AddressRange};
