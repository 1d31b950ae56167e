//! Child subnet enumeration.
//!
//! Splits a network into the equal-sized subnets it contains at a longer
//! prefix, stepping through the range the same way gap scanning walks
//! adjacent subnets.

use crate::error::ParseError;
use crate::models::ipv4::{network_addr, next_network, MAX_PREFIX};
use crate::models::Ipv4Cidr;

/// Refuse enumerations bigger than this; every child becomes an output row.
pub const MAX_CHILDREN: u64 = 65_536;

/// Enumerate the child subnets of `cidr` at `new_prefix`.
///
/// `new_prefix` must not be shorter than the network's own prefix, and the
/// resulting child count must not exceed [`MAX_CHILDREN`].
pub fn split_subnet(cidr: Ipv4Cidr, new_prefix: u8) -> Result<Vec<Ipv4Cidr>, ParseError> {
    assert!(
        new_prefix <= MAX_PREFIX,
        "new_prefix[{new_prefix}] > {MAX_PREFIX} should never happen."
    );
    if new_prefix < cidr.prefix {
        return Err(ParseError::out_of_range(
            &format!("{cidr} -> /{new_prefix}"),
            "child prefix must not be shorter than the network prefix",
        ));
    }

    let count = 1u64 << (new_prefix - cidr.prefix);
    if count > MAX_CHILDREN {
        return Err(ParseError::out_of_range(
            &format!("{cidr} -> /{new_prefix}"),
            &format!("split produces {count} subnets, more than {MAX_CHILDREN}"),
        ));
    }
    log::debug!("split_subnet({cidr}, /{new_prefix}) -> {count} children");

    let mut children = Vec::with_capacity(count as usize);
    let mut current = network_addr(cidr.addr, cidr.prefix);
    for _ in 0..count {
        children.push(Ipv4Cidr {
            addr: current,
            prefix: new_prefix,
        });
        match next_network(current, new_prefix) {
            Some(next) => current = next,
            // top of the address space, nothing beyond
            None => break,
        }
    }
    Ok(children)
}
