//! Output formatting for descriptors.
//!
//! - [`terminal`] - labeled rows with colors
//! - [`json`] - serde_json rendering

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_label, print_ipv6, print_mac, print_split, print_subnet};
