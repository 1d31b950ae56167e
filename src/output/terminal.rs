//! Terminal output with labeled, aligned rows.
//!
//! Each descriptor prints as a block of `label: value` rows with colored
//! labels, the shape a user pastes straight into a ticket or runbook.

use colored::Colorize;

use crate::models::{Ipv4Cidr, Ipv6PrefixDescriptor, MacFormats, SubnetDescriptor};

/// Label column width for descriptor rows.
const LABEL_WIDTH: usize = 12;

/// Format a label as a right-aligned column field.
///
/// Padding happens before any coloring: ANSI escape codes count toward the
/// format width and would break the alignment otherwise.
pub fn format_label(label: &str, width: usize) -> String {
    let label_str = format!("{label}:");
    format!("{label_str:>width$}")
}

fn print_row<T: ToString>(label: &str, value: T) {
    println!(
        "{} {}",
        format_label(label, LABEL_WIDTH).cyan(),
        value.to_string()
    );
}

/// Print an IPv4 subnet descriptor as labeled rows.
pub fn print_subnet(d: &SubnetDescriptor) {
    log::debug!("print_subnet({})", d.cidr());
    print_row("network", d.cidr());
    print_row("mask", d.mask);
    print_row("wildcard", d.wildcard);
    print_row("broadcast", d.broadcast);
    print_row("first host", d.first_host);
    print_row("last host", d.last_host);
    print_row("hosts", d.host_count);
}

/// Print an IPv6 prefix descriptor as labeled rows.
pub fn print_ipv6(d: &Ipv6PrefixDescriptor) {
    log::debug!("print_ipv6({})", d.cidr());
    print_row("network", d.cidr());
    print_row("mask", d.mask);
    print_row("last", d.last_address);
    print_row("addresses", d.address_count_display());
    print_row("compressed", &d.compressed);
    print_row("expanded", &d.expanded);
}

/// Print every rendered form of a MAC address.
pub fn print_mac(formats: &MacFormats) {
    print_row("colon", &formats.colon);
    print_row("hyphen", &formats.hyphen);
    print_row("cisco dot", &formats.cisco_dot);
    print_row("bare lower", &formats.bare_lower);
    print_row("bare upper", &formats.bare_upper);
}

/// Print a child subnet listing, one CIDR per line.
pub fn print_split(children: &[Ipv4Cidr]) {
    println!("{}", format!("{} subnets:", children.len()).cyan());
    for child in children {
        println!("{child}");
    }
}
