//! Byte value to label tables
//!
//! Enumerated SFDP fields are shown as their raw byte followed by a
//! description when the value is a known one.

use core::fmt;

/// Ordered table of byte values and their descriptions
pub type ByteMap = [(u8, &'static str)];

/// Access protocol byte (SFDP header byte 7)
pub static ACCESS_PROTOCOLS: &ByteMap = &[
    (0xF0, "xSPI NAND class-1"),
    (0xF1, "xSPI NAND class-2"),
    (0xF4, "xSPI NAND class-1"),
    (0xF5, "xSPI NAND class-2"),
    (0xFA, "xSPI NOR Profile 2, 5-byte addressing"),
    (0xFC, "xSPI NOR Profile 1, 3-byte addressing"),
    (0xFD, "xSPI NOR Profile 1, 4-byte addressing"),
    (0xFE, "xSPI NOR Profile 1, 4-byte addressing"),
    (0xFF, "legacy option, JESD216B, 3-byte addressing"),
];

/// Find the label for `byte`; the first matching entry wins
pub fn lookup(map: &ByteMap, byte: u8) -> Option<&'static str> {
    map.iter()
        .find(|(value, _)| *value == byte)
        .map(|(_, label)| *label)
}

/// A raw byte together with its resolved label, if any
///
/// Displays as `[ff] (label)`, or just `[ff]` for unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled {
    /// Raw field value
    pub byte: u8,
    /// Description from the lookup table
    pub label: Option<&'static str>,
}

impl Labeled {
    /// Resolve `byte` against `map`
    pub fn resolve(map: &ByteMap, byte: u8) -> Self {
        Self {
            byte,
            label: lookup(map, byte),
        }
    }
}

impl fmt::Display for Labeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "[{:02x}] ({})", self.byte, label),
            None => write!(f, "[{:02x}]", self.byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_lookup_known_protocol() {
        assert_eq!(lookup(ACCESS_PROTOCOLS, 0xF0), Some("xSPI NAND class-1"));
        assert_eq!(
            lookup(ACCESS_PROTOCOLS, 0xFF),
            Some("legacy option, JESD216B, 3-byte addressing")
        );
    }

    #[test]
    fn test_lookup_unknown_protocol() {
        assert_eq!(lookup(ACCESS_PROTOCOLS, 0x00), None);
        assert_eq!(lookup(ACCESS_PROTOCOLS, 0xF2), None);
    }

    #[test]
    fn test_first_match_wins() {
        let map: &ByteMap = &[(0x01, "first"), (0x01, "second")];
        assert_eq!(lookup(map, 0x01), Some("first"));
        assert_eq!(lookup(&[], 0x01), None);
    }

    #[test]
    fn test_labeled_display() {
        assert_eq!(
            Labeled::resolve(ACCESS_PROTOCOLS, 0xFA).to_string(),
            "[fa] (xSPI NOR Profile 2, 5-byte addressing)"
        );
        assert_eq!(Labeled::resolve(ACCESS_PROTOCOLS, 0x00).to_string(), "[00]");
    }
}
