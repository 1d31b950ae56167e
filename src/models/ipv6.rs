//! IPv6 prefix arithmetic.
//!
//! The 128-bit twin of the IPv4 module: masks and range boundaries are
//! computed on `u128` values obtained from [`Ipv6Addr`]. Textual parsing of
//! the address itself is delegated to the standard library, which already
//! handles zero-compression and the full RFC 4291 grammar.

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::error::ParseError;
use crate::models::ipv4::parse_prefix;

/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_PREFIX: u8 = 128;

/// Parse an IPv6 address in any standard textual form.
pub fn parse_ipv6(input: &str) -> Result<Ipv6Addr, ParseError> {
    let trimmed = input.trim();
    Ipv6Addr::from_str(trimmed)
        .map_err(|_| ParseError::invalid_format(trimmed, "not a valid IPv6 address"))
}

/// Convert a prefix length to a 128-bit network mask.
///
/// A prefix of 0 is special-cased: shifting a u128 by its full width is
/// undefined.
pub fn prefix_to_mask(prefix: u8) -> u128 {
    assert!(
        prefix <= MAX_PREFIX,
        "prefix[{prefix}] > {MAX_PREFIX} should never happen."
    );
    if prefix == 0 {
        0
    } else {
        u128::MAX << (MAX_PREFIX - prefix)
    }
}

/// Get the network (first) address for a given IP and prefix length.
pub fn network_addr(addr: Ipv6Addr, prefix: u8) -> Ipv6Addr {
    Ipv6Addr::from(u128::from(addr) & prefix_to_mask(prefix))
}

/// Get the last address of the prefix.
///
/// IPv6 has no broadcast; this is simply the top of the range.
pub fn last_addr(addr: Ipv6Addr, prefix: u8) -> Ipv6Addr {
    let network_bits = u128::from(addr) & prefix_to_mask(prefix);
    Ipv6Addr::from(network_bits | !prefix_to_mask(prefix))
}

/// Number of addresses covered by the prefix.
///
/// `None` encodes 2^128 (prefix 0), which does not fit a u128.
pub fn address_count(prefix: u8) -> Option<u128> {
    assert!(
        prefix <= MAX_PREFIX,
        "prefix[{prefix}] > {MAX_PREFIX} should never happen."
    );
    if prefix == 0 {
        None
    } else {
        Some(1u128 << (MAX_PREFIX - prefix))
    }
}

/// Fully expanded textual form: eight 4-hex-digit groups, no compression.
pub fn expanded(addr: Ipv6Addr) -> String {
    addr.segments().iter().map(|s| format!("{s:04x}")).join(":")
}

/// IPv6 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6Cidr {
    /// The IPv6 address.
    pub addr: Ipv6Addr,
    /// The prefix length (0-128).
    pub prefix: u8,
}

impl Serialize for Ipv6Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv6Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6Cidr::new(&s).map_err(|e| de::Error::custom(format!("{e}")))
    }
}

impl Ipv6Cidr {
    /// Create a new [`Ipv6Cidr`] from a CIDR string (e.g., "2001:db8::/32").
    pub fn new(addr_cidr: &str) -> Result<Ipv6Cidr, ParseError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, prefix_part) = addr_cidr.split_once('/').ok_or_else(|| {
            ParseError::invalid_format(addr_cidr, "expected address/prefix notation")
        })?;
        let addr = parse_ipv6(addr_part)?;
        let prefix = parse_prefix(prefix_part, MAX_PREFIX)?;
        Ok(Ipv6Cidr { addr, prefix })
    }

    /// Get the first (network) address of the prefix.
    pub fn network(&self) -> Ipv6Addr {
        network_addr(self.addr, self.prefix)
    }

    /// Get the last address of the prefix.
    pub fn last(&self) -> Ipv6Addr {
        last_addr(self.addr, self.prefix)
    }
}

impl std::fmt::Display for Ipv6Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
