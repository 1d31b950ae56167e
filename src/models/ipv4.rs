//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for representing networks in `address/prefix`
//! notation, along with the mask and subnet arithmetic used everywhere else
//! in the crate. All arithmetic goes through `u32` so full-range values such
//! as `255.255.255.255` format correctly.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

use crate::error::ParseError;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four decimal groups separated by `.`, each 0-255. Structural
/// failures (wrong group count, non-numeric token) report
/// [`ParseError::InvalidFormat`]; a numeric octet above 255 reports
/// [`ParseError::OutOfRange`].
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, ParseError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseError::invalid_format(
            trimmed,
            "expected four dot-separated octets",
        ));
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::invalid_format(
                trimmed,
                "octets must be decimal numbers",
            ));
        }
        let value: u64 = part
            .parse()
            .map_err(|_| ParseError::out_of_range(trimmed, "octet exceeds 255"))?;
        if value > 255 {
            return Err(ParseError::out_of_range(trimmed, "octet exceeds 255"));
        }
        octets[i] = value as u8;
    }
    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}

/// Parse a prefix length bounded by `max` (32 for IPv4, 128 for IPv6).
pub fn parse_prefix(input: &str, max: u8) -> Result<u8, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::invalid_format(
            trimmed,
            "prefix length must be a decimal number",
        ));
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| ParseError::out_of_range(trimmed, "prefix length does not fit an integer"))?;
    if value > max as u32 {
        return Err(ParseError::out_of_range(
            trimmed,
            &format!("prefix length exceeds {max}"),
        ));
    }
    Ok(value as u8)
}

/// Convert a prefix length to a subnet mask as u32.
///
/// The shift is done in u64 so a prefix of 0 yields an all-zero mask instead
/// of a full-width shift.
///
/// # Examples
/// ```
/// use netcalc::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24), 0xFFFFFF00);
/// assert_eq!(prefix_to_mask(0), 0x00000000);
/// ```
pub fn prefix_to_mask(prefix: u8) -> u32 {
    assert!(
        prefix <= MAX_PREFIX,
        "prefix[{prefix}] > {MAX_PREFIX} should never happen."
    );
    let right_len = MAX_PREFIX - prefix;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Wildcard mask: bitwise complement of the subnet mask.
pub fn wildcard_mask(prefix: u8) -> u32 {
    !prefix_to_mask(prefix)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & prefix_to_mask(prefix))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    let network_bits = u32::from(addr) & prefix_to_mask(prefix);
    Ipv4Addr::from(network_bits | wildcard_mask(prefix))
}

/// Returns the network address following the given subnet, or `None` when
/// the step would run past the top of the address space.
pub fn next_network(addr: Ipv4Addr, prefix: u8) -> Option<Ipv4Addr> {
    let subnet_size = 1u64 << (MAX_PREFIX - prefix);
    let network_bits = u32::from(network_addr(addr, prefix));
    let next_bits = (network_bits as u64).checked_add(subnet_size)?;
    u32::try_from(next_bits).ok().map(Ipv4Addr::from)
}

/// IPv4 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::new(&s).map_err(|e| de::Error::custom(format!("{e}")))
    }
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, ParseError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, prefix_part) = addr_cidr.split_once('/').ok_or_else(|| {
            ParseError::invalid_format(addr_cidr, "expected address/prefix notation")
        })?;
        let addr = parse_ipv4(addr_part)?;
        let prefix = parse_prefix(prefix_part, MAX_PREFIX)?;
        Ok(Ipv4Cidr { addr, prefix })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network() && ip <= self.broadcast()
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(0), 0x00000000);
        assert_eq!(prefix_to_mask(8), 0xFF000000);
        assert_eq!(prefix_to_mask(16), 0xFFFF0000);
        assert_eq!(prefix_to_mask(24), 0xFFFFFF00);
        assert_eq!(prefix_to_mask(31), 0xFFFFFFFE);
        assert_eq!(prefix_to_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_mask_wildcard_roundtrip() {
        for prefix in 0..=32u8 {
            let mask = prefix_to_mask(prefix);
            let wildcard = wildcard_mask(prefix);
            assert_eq!(mask & wildcard, 0, "prefix {prefix}");
            assert_eq!(mask | wildcard, 0xFFFFFFFF, "prefix {prefix}");
        }
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 8), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(network_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(network_addr(ip, 0), Ipv4Addr::new(0, 0, 0, 0));
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(broadcast_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(broadcast_addr(ip, 16), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(broadcast_addr(ip, 8), Ipv4Addr::new(192, 255, 255, 255));
        assert_eq!(broadcast_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 0));
        // full range must not lose the high bit
        assert_eq!(
            broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 0),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_next_network() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(next_network(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 2, 0));
        assert_eq!(next_network(ip, 16).unwrap(), Ipv4Addr::new(192, 169, 0, 0));
        assert_eq!(next_network(ip, 8).unwrap(), Ipv4Addr::new(193, 0, 0, 0));
        assert_eq!(next_network(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 1));

        assert!(next_network(Ipv4Addr::new(255, 255, 255, 255), 24).is_none());
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(
            parse_ipv4("192.168.1.0").unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            parse_ipv4(" 10.0.0.5 ").unwrap(),
            Ipv4Addr::new(10, 0, 0, 5)
        );
        assert_eq!(
            parse_ipv4("255.255.255.255").unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_parse_ipv4_invalid_format() {
        assert!(matches!(
            parse_ipv4("1.2.3"),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_ipv4("1.2.3.4.5"),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_ipv4("a.b.c.d"),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_ipv4("1..2.3"),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_ipv4("1.2.3.-4"),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_ipv4_out_of_range() {
        assert!(matches!(
            parse_ipv4("999.1.1.1"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_ipv4("1.2.3.256"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_ipv4("1.2.3.99999999999999999999"),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("0", MAX_PREFIX).unwrap(), 0);
        assert_eq!(parse_prefix("24", MAX_PREFIX).unwrap(), 24);
        assert_eq!(parse_prefix("32", MAX_PREFIX).unwrap(), 32);
        assert_eq!(parse_prefix("128", 128).unwrap(), 128);

        assert!(matches!(
            parse_prefix("33", MAX_PREFIX),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_prefix("129", 128),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_prefix("abc", MAX_PREFIX),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_prefix("", MAX_PREFIX),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_cidr_new() {
        let cidr = Ipv4Cidr::new("10.1.1.0/28").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(cidr.prefix, 28);

        assert!(Ipv4Cidr::new("10.1.1.0").is_err());
        assert!(Ipv4Cidr::new("10.1.1.0/33").is_err());
        assert!(Ipv4Cidr::new("999.1.1.0/24").is_err());
    }

    #[test]
    fn test_cidr_cmp() {
        let ip1 = Ipv4Cidr::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4Cidr::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4Cidr::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_cidr_contains() {
        let cidr = Ipv4Cidr::new("10.0.10.0/24").unwrap();
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 1)));
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 255)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 11, 0)));
        assert_eq!(cidr.broadcast(), Ipv4Addr::new(10, 0, 10, 255));
    }

    #[test]
    fn test_cidr_serde_roundtrip() {
        let cidr = Ipv4Cidr::new("192.168.1.0/24").unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"192.168.1.0/24\"");
        let back: Ipv4Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
    }
}
