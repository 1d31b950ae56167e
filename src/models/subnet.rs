//! Derived subnet descriptor bundles.
//!
//! A descriptor is a read-only result computed fresh on each request from
//! `(address, prefix)`; nothing here is cached or mutated afterwards.

use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::ipv4::{prefix_to_mask, wildcard_mask, Ipv4Cidr};
use super::ipv6;
use super::ipv6::Ipv6Cidr;

/// Canonical descriptors of an IPv4 subnet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// Network (lowest) address.
    pub network: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// Subnet mask in dotted-decimal form.
    pub mask: Ipv4Addr,
    /// Wildcard mask (complement of the subnet mask).
    pub wildcard: Ipv4Addr,
    /// Broadcast (highest) address.
    pub broadcast: Ipv4Addr,
    /// First usable host address.
    pub first_host: Ipv4Addr,
    /// Last usable host address.
    pub last_host: Ipv4Addr,
    /// Number of usable host addresses.
    pub host_count: u64,
}

impl SubnetDescriptor {
    /// Compute the descriptor bundle for an address and prefix length.
    ///
    /// Total for any valid prefix. The /31 and /32 regimes have no
    /// network/broadcast exclusion: applying the usual +-1 adjustment there
    /// would wrap into the adjacent subnet, so the boundary values are
    /// emitted exactly as computed.
    pub fn compute(addr: Ipv4Addr, prefix: u8) -> SubnetDescriptor {
        let mask = prefix_to_mask(prefix);
        let wildcard = wildcard_mask(prefix);
        let network_bits = u32::from(addr) & mask;
        let broadcast_bits = network_bits | wildcard;

        let (first_host, last_host, host_count) = match prefix {
            32 => (network_bits, network_bits, 1),
            31 => (network_bits, broadcast_bits, 2),
            _ => (
                network_bits + 1,
                broadcast_bits - 1,
                (1u64 << (32 - prefix)) - 2,
            ),
        };

        SubnetDescriptor {
            network: Ipv4Addr::from(network_bits),
            prefix,
            mask: Ipv4Addr::from(mask),
            wildcard: Ipv4Addr::from(wildcard),
            broadcast: Ipv4Addr::from(broadcast_bits),
            first_host: Ipv4Addr::from(first_host),
            last_host: Ipv4Addr::from(last_host),
            host_count,
        }
    }

    /// The subnet in CIDR notation.
    pub fn cidr(&self) -> Ipv4Cidr {
        Ipv4Cidr {
            addr: self.network,
            prefix: self.prefix,
        }
    }
}

/// Canonical descriptors of an IPv6 prefix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ipv6PrefixDescriptor {
    /// First address of the prefix.
    pub network: Ipv6Addr,
    /// Prefix length (0-128).
    pub prefix: u8,
    /// Network mask.
    pub mask: Ipv6Addr,
    /// Last address of the prefix.
    pub last_address: Ipv6Addr,
    /// Number of addresses; `None` encodes 2^128 (prefix 0).
    pub address_count: Option<u128>,
    /// Canonical zero-compressed form of the network address.
    pub compressed: String,
    /// Fully expanded form, eight 4-hex-digit groups.
    pub expanded: String,
}

impl Ipv6PrefixDescriptor {
    /// Compute the descriptor bundle for an address and prefix length.
    pub fn compute(addr: Ipv6Addr, prefix: u8) -> Ipv6PrefixDescriptor {
        let network = ipv6::network_addr(addr, prefix);
        Ipv6PrefixDescriptor {
            network,
            prefix,
            mask: Ipv6Addr::from(ipv6::prefix_to_mask(prefix)),
            last_address: ipv6::last_addr(addr, prefix),
            address_count: ipv6::address_count(prefix),
            compressed: network.to_string(),
            expanded: ipv6::expanded(network),
        }
    }

    /// The prefix in CIDR notation.
    pub fn cidr(&self) -> Ipv6Cidr {
        Ipv6Cidr {
            addr: self.network,
            prefix: self.prefix,
        }
    }

    /// Address count as a displayable string (`2^128` for prefix 0).
    pub fn address_count_display(&self) -> String {
        match self.address_count {
            Some(count) => count.to_string(),
            None => "2^128".to_string(),
        }
    }
}
