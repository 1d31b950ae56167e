//! Command-line interface definitions and dispatch.

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::ParseError;
use crate::output;
use crate::{compute_ipv4_subnet, compute_ipv6_prefix, format_mac_address, split_ipv4_subnet};

/// Network address arithmetic toolkit.
#[derive(Parser, Debug)]
#[command(name = "netcalc", version, about = "Subnet, IPv6 prefix and MAC address calculations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "NETCALC_FORMAT",
        default_value = "text"
    )]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labeled rows
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// IPv4 subnet details for an address and prefix length
    Subnet {
        /// Address, in CIDR notation unless --prefix is given
        target: String,
        /// Prefix length, when not part of TARGET
        #[arg(long)]
        prefix: Option<String>,
    },
    /// IPv6 prefix details for an address and prefix length
    Ipv6 {
        /// Address, in CIDR notation unless --prefix is given
        target: String,
        /// Prefix length, when not part of TARGET
        #[arg(long)]
        prefix: Option<String>,
    },
    /// MAC address format conversions
    Mac {
        /// MAC address in any common separator style
        raw: String,
    },
    /// List the child subnets of a network at a longer prefix
    Split {
        /// Parent network in CIDR notation
        cidr: String,
        /// Prefix length of the children
        new_prefix: String,
    },
}

/// Split a `target` argument into address and prefix strings.
///
/// The prefix either comes from the explicit option or from the `/` in the
/// target itself.
fn split_target<'a>(target: &'a str, prefix: Option<&'a str>) -> Result<(&'a str, &'a str), ParseError> {
    match prefix {
        Some(p) => Ok((target, p)),
        None => target.split_once('/').ok_or_else(|| {
            ParseError::invalid_format(target, "missing prefix length (use ADDR/PREFIX or --prefix)")
        }),
    }
}

/// Run the parsed command, printing to stdout in the selected format.
pub fn run(cli: Cli) -> Result<(), ParseError> {
    match &cli.command {
        Command::Subnet { target, prefix } => {
            let (addr, prefix) = split_target(target, prefix.as_deref())?;
            let descriptor = compute_ipv4_subnet(addr, prefix)?;
            match cli.format {
                OutputFormat::Text => output::print_subnet(&descriptor),
                OutputFormat::Json => print_json(&descriptor),
            }
        }
        Command::Ipv6 { target, prefix } => {
            let (addr, prefix) = split_target(target, prefix.as_deref())?;
            let descriptor = compute_ipv6_prefix(addr, prefix)?;
            match cli.format {
                OutputFormat::Text => output::print_ipv6(&descriptor),
                OutputFormat::Json => print_json(&descriptor),
            }
        }
        Command::Mac { raw } => {
            let formats = format_mac_address(raw)?;
            match cli.format {
                OutputFormat::Text => output::print_mac(&formats),
                OutputFormat::Json => print_json(&formats),
            }
        }
        Command::Split { cidr, new_prefix } => {
            let children = split_ipv4_subnet(cidr, new_prefix)?;
            match cli.format {
                OutputFormat::Text => output::print_split(&children),
                OutputFormat::Json => print_json(&children),
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match output::to_json(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("JSON rendering failed: {e}"),
    }
}
