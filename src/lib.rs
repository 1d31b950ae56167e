//! netcalc - network address arithmetic.
//!
//! A pure, synchronous function library for subnet and address
//! calculations, plus the CLI that fronts it. Every entry point takes
//! strings, validates them, and returns a freshly computed descriptor;
//! there is no shared state between calls.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::ParseError;
pub use models::{
    Ipv4Cidr, Ipv6Cidr, Ipv6PrefixDescriptor, MacAddress, MacFormats, SubnetDescriptor,
};

/// Compute the canonical subnet descriptors for an IPv4 address and prefix.
pub fn compute_ipv4_subnet(address: &str, prefix: &str) -> Result<SubnetDescriptor, ParseError> {
    log::debug!("compute_ipv4_subnet({address}, /{prefix})");
    let addr = models::parse_ipv4(address)?;
    let prefix = models::parse_prefix(prefix, models::ipv4::MAX_PREFIX)?;
    Ok(SubnetDescriptor::compute(addr, prefix))
}

/// Compute the prefix descriptors for an IPv6 address and prefix.
pub fn compute_ipv6_prefix(address: &str, prefix: &str) -> Result<Ipv6PrefixDescriptor, ParseError> {
    log::debug!("compute_ipv6_prefix({address}, /{prefix})");
    let addr = models::parse_ipv6(address)?;
    let prefix = models::parse_prefix(prefix, models::ipv6::MAX_PREFIX)?;
    Ok(Ipv6PrefixDescriptor::compute(addr, prefix))
}

/// Re-render a MAC address in every supported separator style.
pub fn format_mac_address(raw: &str) -> Result<MacFormats, ParseError> {
    log::debug!("format_mac_address({raw})");
    Ok(MacAddress::parse(raw)?.formats())
}

/// Enumerate the child subnets of `cidr` at `new_prefix`.
pub fn split_ipv4_subnet(cidr: &str, new_prefix: &str) -> Result<Vec<Ipv4Cidr>, ParseError> {
    log::debug!("split_ipv4_subnet({cidr}, /{new_prefix})");
    let cidr = Ipv4Cidr::new(cidr)?;
    let new_prefix = models::parse_prefix(new_prefix, models::ipv4::MAX_PREFIX)?;
    processing::split_subnet(cidr, new_prefix)
}
