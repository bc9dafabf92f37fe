//! Identifier text format.
//!
//! Identifiers are 32-bit unsigned integers. On labels and in the shell they
//! are shown as four 8-bit big-endian groups, each two lowercase hex digits,
//! joined by hyphens: `1a-00-ff-03`. The rendering is purely presentational
//! and round-trips losslessly back to the integer.

use std::fmt;

/// Error parsing an identifier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier {:?} (expected xx-xx-xx-xx hex)", self.0)
    }
}

impl std::error::Error for ParseIdError {}

/// Format an identifier as `xx-xx-xx-xx`.
pub fn format_id(id: u32) -> String {
    let [a, b, c, d] = id.to_be_bytes();
    format!("{a:02x}-{b:02x}-{c:02x}-{d:02x}")
}

/// Parse an identifier from its label form.
///
/// Hyphens are cosmetic and stripped before parsing, so both `1a-00-ff-03`
/// and `1a00ff03` are accepted. Anything that is not 32 bits of hex is
/// rejected.
pub fn parse_id(s: &str) -> Result<u32, ParseIdError> {
    let hex: String = s.trim().chars().filter(|&c| c != '-').collect();
    if hex.is_empty() || hex.len() > 8 {
        return Err(ParseIdError(s.to_string()));
    }
    u32::from_str_radix(&hex, 16).map_err(|_| ParseIdError(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_examples() {
        assert_eq!(format_id(0), "00-00-00-00");
        assert_eq!(format_id(1), "00-00-00-01");
        assert_eq!(format_id(0x1a00ff03), "1a-00-ff-03");
        assert_eq!(format_id(u32::MAX), "ff-ff-ff-ff");
    }

    #[test]
    fn test_roundtrip() {
        let values = [0, 1, 0xff, 0x100, 0xdeadbeef, u32::MAX - 1, u32::MAX];
        for v in values {
            assert_eq!(parse_id(&format_id(v)).unwrap(), v);
        }
    }

    #[test]
    fn test_parse_without_hyphens() {
        assert_eq!(parse_id("1a00ff03").unwrap(), 0x1a00ff03);
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("  00-00-00-2a ").unwrap(), 42);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_id("").is_err());
        assert!(parse_id("--").is_err());
        assert!(parse_id("zz-00-00-00").is_err());
        assert!(parse_id("01-02-03-04-05").is_err()); // more than 32 bits
    }
}
