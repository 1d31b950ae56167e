//! MAC address parsing and format rendering.
//!
//! Accepts any of the common separator styles (`00:1a:2b`, `00-1a-2b`,
//! `001a.2b3c`, bare hex, with or without whitespace) and re-renders the
//! 48-bit value in every style at once.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[:\-.\s]+").expect("Invalid Regex?");
    static ref HEX12: Regex = Regex::new(r"^[0-9A-Fa-f]{12}$").expect("Invalid Regex?");
}

/// 48-bit MAC address.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct MacAddress {
    octets: [u8; 6],
}

/// All rendered forms of a MAC address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MacFormats {
    /// Colon-separated pairs, uppercase: `00:1A:2B:3C:4D:5E`.
    pub colon: String,
    /// Hyphen-separated pairs, uppercase: `00-1A-2B-3C-4D-5E`.
    pub hyphen: String,
    /// Cisco dot notation, 4-digit groups, lowercase: `001a.2b3c.4d5e`.
    pub cisco_dot: String,
    /// Bare 12 hex digits, lowercase.
    pub bare_lower: String,
    /// Bare 12 hex digits, uppercase.
    pub bare_upper: String,
}

impl MacAddress {
    /// Parse a MAC address from any common textual form.
    ///
    /// Separators (`:`, `-`, `.`, whitespace) are stripped first; what
    /// remains must be exactly 12 hexadecimal digits.
    pub fn parse(raw: &str) -> Result<MacAddress, ParseError> {
        let stripped = SEPARATORS.replace_all(raw.trim(), "");
        if !HEX12.is_match(&stripped) {
            return Err(ParseError::invalid_format(
                raw.trim(),
                "expected 12 hexadecimal digits after separator stripping",
            ));
        }

        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            let pair = &stripped[i * 2..i * 2 + 2];
            *octet = u8::from_str_radix(pair, 16)
                .map_err(|_| ParseError::invalid_format(raw.trim(), "invalid hex digit"))?;
        }
        Ok(MacAddress { octets })
    }

    /// The six octets of the address.
    pub fn octets(&self) -> [u8; 6] {
        self.octets
    }

    /// Render the address in every supported form.
    pub fn formats(&self) -> MacFormats {
        let bare_lower: String = self.octets.iter().map(|o| format!("{o:02x}")).collect();
        let bare_upper = bare_lower.to_uppercase();

        MacFormats {
            colon: self.octets.iter().map(|o| format!("{o:02X}")).join(":"),
            hyphen: self.octets.iter().map(|o| format!("{o:02X}")).join("-"),
            cisco_dot: bare_lower
                .as_bytes()
                .chunks(4)
                .map(|group| String::from_utf8_lossy(group).into_owned())
                .join("."),
            bare_lower,
            bare_upper,
        }
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.formats().colon)
    }
}
