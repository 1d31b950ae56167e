//! Core data types and pure address arithmetic.
//!
//! This module contains the stateless computational core:
//! - [`Ipv4Cidr`] - IPv4 network with CIDR notation support
//! - [`Ipv6Cidr`] - IPv6 prefix with CIDR notation support
//! - [`MacAddress`] - 48-bit MAC address with format rendering
//! - [`SubnetDescriptor`] and [`Ipv6PrefixDescriptor`] - derived result bundles

pub mod ipv4;
pub mod ipv6;
mod mac;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, network_addr, next_network, parse_ipv4, parse_prefix, prefix_to_mask,
    wildcard_mask, Ipv4Cidr,
};
pub use ipv6::{parse_ipv6, Ipv6Cidr};
pub use mac::{MacAddress, MacFormats};
pub use subnet::{Ipv6PrefixDescriptor, SubnetDescriptor};
